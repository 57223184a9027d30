use crate::export::ExportFormat;
use crate::models::event::{
    BottleContent, BreastSide, FoodAcceptance, FoodConsistency, MealType, MilestoneKind,
    VaccineSite,
};
use crate::models::profile::{Gender, ThemeColor};
use crate::models::reminder::ReminderKind;
use crate::models::widget::WidgetKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for babylog
/// CLI application to track baby care events with SQLite
#[derive(Parser)]
#[command(
    name = "babylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple baby tracking CLI: log feedings, sleep, growth and milestones",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show or update the baby profile
    Profile {
        #[arg(long, help = "Baby name")]
        name: Option<String>,

        #[arg(long = "birth-date", help = "Birth date (YYYY-MM-DD)")]
        birth_date: Option<String>,

        #[arg(long, value_enum, help = "Gender")]
        gender: Option<Gender>,

        #[arg(long, value_enum, help = "Theme color")]
        theme: Option<ThemeColor>,
    },

    /// Log a new event
    Add {
        #[command(subcommand)]
        event: AddEvent,
    },

    /// Edit an event in place (same id)
    Edit {
        /// Event id (see `list`)
        id: String,

        #[arg(long = "at", help = "New timestamp (YYYY-MM-DD or ISO date-time)")]
        at: Option<String>,

        #[arg(long, help = "Replace the notes")]
        notes: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Event id (see `list`)
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show the diary, grouped by day
    List {
        #[arg(
            long,
            short,
            help = "Filter by event kind, 'all', or the 'milestone' meta-category",
            default_value = "all"
        )]
        filter: String,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
        )]
        period: Option<String>,
    },

    /// Home view: age, latest measurements, pinned milestones, widgets
    Status,

    /// Growth chart data (weight x length merged per day)
    Growth,

    /// Vaccination schedule
    Vaccines {
        #[command(subcommand)]
        action: Option<VaccinesAction>,
    },

    /// Pinned milestones and their completed state
    Milestones {
        #[command(subcommand)]
        action: Option<MilestonesAction>,
    },

    /// Reminders (appointments, vaccines, anything)
    Agenda {
        #[command(subcommand)]
        action: Option<AgendaAction>,
    },

    /// Stored document references
    Docs {
        #[command(subcommand)]
        action: Option<DocsAction>,
    },

    /// Status-view widgets
    Widgets {
        #[command(subcommand)]
        action: Option<WidgetsAction>,
    },

    /// Switch between the light and dark theme
    Theme {
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        #[arg(long)]
        light: bool,
    },

    /// Export the diary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup (zip on Windows, tar.gz elsewhere)")]
        compress: bool,
    },
}

/// Options shared by every `add` subcommand.
#[derive(Args)]
pub struct CommonEventArgs {
    /// Timestamp (YYYY-MM-DD or ISO date-time); defaults to now
    #[arg(long = "at")]
    pub at: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum AddEvent {
    /// Breastfeeding session
    Breastfeeding {
        #[arg(value_enum)]
        side: BreastSide,

        #[arg(long, help = "Duration in minutes")]
        duration: u32,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Bottle feeding
    Bottle {
        #[arg(value_enum)]
        content: BottleContent,

        #[arg(long, help = "Amount in ml")]
        amount: u32,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Solid food meal
    Food {
        #[arg(value_enum)]
        meal: MealType,

        #[arg(long, value_enum)]
        consistency: Option<FoodConsistency>,

        #[arg(long, value_enum, help = "How much was eaten")]
        acceptance: Option<FoodAcceptance>,

        #[arg(long)]
        ingredients: Option<String>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Milk pumping
    Pumping {
        #[arg(long, help = "Amount in ml")]
        amount: Option<u32>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Diaper change
    Diaper {
        #[arg(long)]
        pee: bool,

        #[arg(long)]
        poop: bool,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Sleep window
    Sleep {
        #[arg(long, help = "Date of falling asleep (YYYY-MM-DD); defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Fell asleep at (HH:MM)")]
        start: String,

        #[arg(long, help = "Woke up at (HH:MM); before --start means overnight")]
        end: String,

        #[arg(long, help = "Log as a nap instead of night sleep")]
        nap: bool,

        #[arg(long, help = "Number of awakenings")]
        awakenings: Option<u32>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Stroll / outing
    Stroll {
        #[arg(long, help = "Duration in minutes")]
        duration: Option<u32>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Bath
    Bath {
        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Weight measurement
    Weight {
        /// Weight in kg
        kg: f64,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Length measurement
    Length {
        /// Length in cm
        cm: f64,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Head circumference measurement
    Head {
        /// Circumference in cm
        cm: f64,

        #[arg(long, help = "Plagiocephaly asymmetry in mm")]
        asymmetry: Option<f64>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Combined measurement session (fans out into separate events)
    Measurements {
        #[arg(long, help = "Weight in kg")]
        weight: Option<f64>,

        #[arg(long, help = "Length in cm")]
        length: Option<f64>,

        #[arg(long, help = "Head circumference in cm")]
        head: Option<f64>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Body temperature
    Temperature {
        /// Temperature in degrees Celsius
        celsius: f64,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Doctor visit
    Doctor {
        #[arg(long)]
        specialty: Option<String>,

        #[arg(long = "name", help = "Doctor name")]
        doctor_name: Option<String>,

        #[arg(long)]
        reason: Option<String>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Vaccine dose (see `vaccines` for the schedule ids)
    Vaccine {
        /// Vaccine id from the schedule
        id: String,

        #[arg(long, value_enum, help = "Application site")]
        site: Option<VaccineSite>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Illness episode
    Illness {
        #[arg(long = "symptom", help = "Repeatable symptom flag")]
        symptoms: Vec<String>,

        #[arg(long)]
        diagnosis: Option<String>,

        #[arg(long, help = "Measured temperature in degrees Celsius")]
        temperature: Option<f64>,

        #[arg(long)]
        treatment: Option<String>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Medication given
    Medication {
        /// Medication name
        name: String,

        #[arg(long)]
        dosage: Option<String>,

        #[arg(long = "for", help = "Treatment duration, e.g. '5 days'")]
        duration: Option<String>,

        #[command(flatten)]
        common: CommonEventArgs,
    },

    /// Developmental milestone
    Milestone {
        #[arg(value_enum)]
        kind: MilestoneKind,

        #[arg(long, help = "Label for a custom milestone")]
        label: Option<String>,

        #[command(flatten)]
        common: CommonEventArgs,
    },
}

#[derive(Subcommand)]
pub enum VaccinesAction {
    /// Show the schedule grouped by due month (default)
    List {
        #[arg(long, help = "Include private-only doses")]
        all: bool,
    },

    /// Mark a dose as taken (creates the vaccine event)
    Take {
        /// Vaccine id from the schedule
        id: String,

        #[arg(long, value_enum, help = "Application site")]
        site: Option<VaccineSite>,
    },

    /// Un-mark a dose (deletes the referencing event)
    Undo {
        /// Vaccine id from the schedule
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MilestonesAction {
    /// Show pinned milestones and their state (default)
    List,

    /// Pin a milestone kind to the status view
    Pin {
        /// Milestone kind, e.g. first_step
        kind: MilestoneKind,
    },

    /// Remove a milestone kind from the status view
    Unpin {
        /// Milestone kind, e.g. first_step
        kind: MilestoneKind,
    },
}

#[derive(Subcommand)]
pub enum AgendaAction {
    /// Show all reminders, soonest first (default)
    List,

    /// Add a reminder
    Add {
        title: String,

        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "Time (HH:MM)")]
        time: String,

        #[arg(long, value_enum, default_value = "other")]
        kind: ReminderKind,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a reminder by id
    Del { id: String },
}

#[derive(Subcommand)]
pub enum DocsAction {
    /// Show stored documents (default)
    List,

    /// Add a document reference
    Add {
        title: String,

        #[arg(long, value_enum, default_value = "other")]
        kind: crate::models::document::DocumentKind,

        #[arg(long, help = "Document number")]
        number: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a document by id
    Del { id: String },
}

#[derive(Subcommand)]
pub enum WidgetsAction {
    /// Show configured widgets (default)
    List,

    /// Add a widget to the status view
    Add {
        #[arg(value_enum)]
        kind: WidgetKind,
    },

    /// Remove a widget by id
    Del { id: String },
}
