use clap::Subcommand;

/// Backend catalog listings.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List available services.
    Services,
    /// List service steps.
    Steps,
    /// List cases known to the backend.
    Cases,
}
