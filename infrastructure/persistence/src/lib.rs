pub mod local_storage;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
