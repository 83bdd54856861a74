pub(crate) mod ingest;
pub(crate) mod latest;
pub(crate) mod locations;
pub(crate) mod password;
pub(crate) mod serve;
