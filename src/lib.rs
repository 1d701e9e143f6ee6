pub mod books;
pub mod library;

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod utils {
    pub mod ddb;
}
