use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse available accommodation.
    Listings(ListingsArgs),
    /// Show one establishment.
    Show(ShowArgs),
    /// Send a stay enquiry for an establishment.
    Enquire(EnquireArgs),
    /// Show or clear the result of the last enquiry.
    Confirmation(ConfirmationArgs),
    /// Print the JSON Schema of the enquiry payload.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct ListingsArgs {
    /// Max establishments to show
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Establishment ID
    pub id: String,
}

// Missing fields go through validation as empty values.
#[derive(Clone, Debug, Args)]
pub struct EnquireArgs {
    /// Establishment ID
    pub id: String,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long = "email")]
    pub email_address: Option<String>,
    #[arg(long)]
    pub check_in: Option<String>,
    #[arg(long)]
    pub check_out: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ConfirmationArgs {
    /// Remove the stored result instead of showing it
    #[arg(long)]
    pub clear: bool,
}
