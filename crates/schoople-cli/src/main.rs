use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use schoople_cli::academic_years::activate_year;
use schoople_cli::accounts::{NewUser, assign_role, create_user};
use schoople_cli::seeder::{SeedConfig, seed_database};
use schoople_db::{PgPool, init_db_pool, run_migrations};
use schoople_models::ids::{AcademicYearId, RoleId, StaffId, StudentId, UserId};
use schoople_models::users::RoleType;

#[derive(Parser)]
#[command(name = "schoople-cli")]
#[command(about = "Schoople CLI - Administrative tools for Schoople", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a login account
    CreateUser {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Link the account to a student record
        #[arg(long)]
        student_id: Option<i32>,

        /// Link the account to a staff record
        #[arg(long)]
        staff_id: Option<i32>,

        /// Grant a role of this type: admin, staff or student
        #[arg(short = 'r', long)]
        role: Option<RoleType>,
    },
    /// Grant an existing role to a user
    AssignRole {
        #[arg(long)]
        user_id: i32,

        #[arg(long)]
        role_id: i32,
    },
    /// Make an academic year the only active one
    ActivateYear {
        /// Academic year id
        id: i32,
    },
    /// Seed the database with a demo school
    Seed {
        /// Number of grades
        #[arg(short = 'g', long, default_value = "3")]
        grades: usize,

        /// Students per grade-section
        #[arg(short = 's', long, default_value = "10")]
        students: usize,

        /// Number of teachers
        #[arg(short = 't', long, default_value = "6")]
        teachers: usize,

        /// Password for every seeded account
        #[arg(long, default_value = "password")]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url, 5)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser {
            username,
            password,
            student_id,
            staff_id,
            role,
        } => handle_create_user(&pool, username, password, student_id, staff_id, role).await,
        Commands::AssignRole { user_id, role_id } => {
            let id = assign_role(&pool, UserId(user_id), RoleId(role_id)).await?;
            println!("✅ Role {role_id} granted to user {user_id} (assignment {id})");
            Ok(())
        }
        Commands::ActivateYear { id } => {
            let previous = activate_year(&pool, AcademicYearId(id)).await?;
            match previous {
                Some(previous) => println!("✅ Academic year {id} is active (was {previous})"),
                None => println!("✅ Academic year {id} is active"),
            }
            Ok(())
        }
        Commands::Seed {
            grades,
            students,
            teachers,
            password,
        } => {
            let config = SeedConfig {
                grades,
                students_per_section: students,
                teachers,
                password,
                ..SeedConfig::default()
            };
            handle_seed(&pool, &config).await
        }
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await.context("Migration failed")?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_user(
    pool: &PgPool,
    username: Option<String>,
    password: Option<String>,
    student_id: Option<i32>,
    staff_id: Option<i32>,
    role: Option<RoleType>,
) -> anyhow::Result<()> {
    // Use provided values or prompt interactively
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let new_user = NewUser {
        username,
        password,
        student_id: student_id.map(StudentId),
        staff_id: staff_id.map(StaffId),
        role,
    };

    let user_id = create_user(pool, &new_user).await?;
    println!("\n✅ User created successfully!");
    println!("   Id: {user_id}");
    println!("   Username: {}", new_user.username.trim());
    if let Some(role) = role {
        println!("   Role: {role}");
    }
    Ok(())
}

async fn handle_seed(pool: &PgPool, config: &SeedConfig) -> anyhow::Result<()> {
    println!("🌱 Seeding database...\n");
    let summary = seed_database(pool, config).await?;

    println!("\n✅ Seeding complete!");
    println!("   School id: {}", summary.school_id);
    println!("   Active academic year: {}", summary.academic_year_id);
    println!("   Grade-sections: {}", summary.grade_sections);
    println!("   Students: {}", summary.students);
    println!("   Accounts: {}", summary.users);
    println!("   Timetable entries: {}", summary.timetable_entries);
    println!("   Attendance rows: {}", summary.attendance_rows);
    println!("   Transport routes: {}", summary.transports);
    println!("   Events: {}", summary.events);
    println!("\n   Student logins are student1, student2, ... with the seed password.");
    Ok(())
}
