//! # Schoople CLI
//!
//! Administrative tooling for the Schoople database. The API itself never
//! writes credentials; accounts, role grants and the active academic year are
//! managed from here.
//!
//! ```ignore
//! use schoople_cli::accounts::{NewUser, create_user};
//!
//! let user_id = create_user(&pool, &NewUser::new("jdoe", "secret")).await?;
//! ```

pub mod academic_years;
pub mod accounts;
pub mod seeder;
