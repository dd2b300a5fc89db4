// Jobboard Infrastructure - SQLite Adapter
// Implements: Repository<Employer>, Repository<Job>

mod connection;
mod employer_table;
mod entity;
mod error;
mod job_table;
mod migration;
mod repository;

pub use connection::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use entity::SqliteEntity;
pub use error::map_sqlx_error;
pub use migration::run_migrations;
pub use repository::SqliteRepository;

use jobboard_core::domain::{Employer, Job};

pub type SqliteEmployerRepository = SqliteRepository<Employer>;
pub type SqliteJobRepository = SqliteRepository<Job>;
