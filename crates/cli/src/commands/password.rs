use homesense_service::hash_password;

pub(crate) fn run_hash_password(password: &str) {
    println!("{}", hash_password(password));
}
