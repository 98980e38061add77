pub mod db;
pub mod health {
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
