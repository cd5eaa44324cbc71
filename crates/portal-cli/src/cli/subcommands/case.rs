use clap::Subcommand;

/// Case commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CaseCommands {
    /// Create a case for a service.
    Create {
        /// Service type code.
        #[arg(long)]
        service: String,
        /// Arabic service name.
        #[arg(long)]
        service_name_ar: String,
    },
    /// Move a case to a new status.
    Status {
        /// Case ID or case number.
        id: String,
        /// new, under-review, approved, rejected, completed
        status: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Append a message to a case.
    Message {
        id: String,
        /// user or agent
        #[arg(long)]
        role: String,
        #[arg(long)]
        content: String,
    },
    /// Attach a local file to a case.
    Document {
        id: String,
        #[arg(long)]
        path: String,
    },
    /// Get a case by ID or case number.
    Get { id: String },
    /// List cases.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
