use std::{fs, io::Read, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use procurement_ledger::{
    actor::ActorContext,
    config::{self, AppConfig},
    db,
    documents::Mutation,
    entities::{materials, po_headers, vendors},
    services::procurement::ProcurementService,
    EnginePolicy,
};

#[derive(Parser)]
#[command(name = "procurement", about = "Procurement ledger: purchase orders, receipts and invoices", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[arg(long, global = true, help = "User id recorded as the actor of mutations")]
    actor: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Apply a JSON-encoded mutation read from a file, or stdin when omitted
    Apply {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    #[command(subcommand)]
    Po(PoCommands),
    #[command(subcommand)]
    Vendor(VendorCommands),
    #[command(subcommand)]
    Material(MaterialCommands),
    #[command(subcommand)]
    Audit(AuditCommands),
}

#[derive(Subcommand)]
enum PoCommands {
    Submit { po_id: String },
    Approve { po_id: String },
    Reject {
        po_id: String,
        #[arg(long)]
        reason: String,
    },
    Close { po_id: String },
    Total { po_id: String },
    Status { po_id: String },
    /// Three-way match of ordered, received and invoiced quantities
    Match { po_id: String },
}

#[derive(Subcommand)]
enum VendorCommands {
    Activate { vm_id: String },
    Deactivate { vm_id: String },
    Exists { code: String },
    Active,
}

#[derive(Subcommand)]
enum MaterialCommands {
    Activate { mm_id: String },
    Deactivate { mm_id: String },
    Active,
}

#[derive(Subcommand)]
enum AuditCommands {
    /// Audit records of a document, oldest first
    Trail { document_id: String },
}

struct CliContext {
    _config: AppConfig,
    db: Arc<db::DbPool>,
    service: ProcurementService,
}

impl CliContext {
    async fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load application config")?;
        config::init_tracing(config.log_level(), config.log_json);

        let db_pool = db::establish_connection_from_app_config(&config)
            .await
            .context("failed to connect to database")?;
        let db = Arc::new(db_pool);

        if config.auto_migrate {
            db::run_migrations(&db)
                .await
                .context("failed to run database migrations")?;
        }

        let service = ProcurementService::new(db.clone(), EnginePolicy::from(&config));
        Ok(Self {
            _config: config,
            db,
            service,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = CliContext::initialize().await?;
    let actor = ActorContext::from_option(cli.actor.clone());

    match cli.command {
        Commands::Migrate => {
            db::run_migrations(&context.db)
                .await
                .context("failed to run database migrations")?;
            println!("Migrations applied");
        }
        Commands::Apply { file } => handle_apply(&context, file, &actor, cli.json).await?,
        Commands::Po(command) => handle_po_command(&context, command, &actor, cli.json).await?,
        Commands::Vendor(command) => handle_vendor_command(&context, command, &actor, cli.json).await?,
        Commands::Material(command) => {
            handle_material_command(&context, command, &actor, cli.json).await?
        }
        Commands::Audit(AuditCommands::Trail { document_id }) => {
            let trail = context
                .service
                .audit_trail(&document_id)
                .await
                .context("failed to load audit trail")?;
            if cli.json {
                print_json(&trail)?;
            } else if trail.is_empty() {
                println!("No audit records for {}", document_id);
            } else {
                for record in trail {
                    println!(
                        "- {} • {} • {}",
                        record.recorded_at.to_rfc3339(),
                        record.status_label,
                        record.actor
                    );
                }
            }
        }
    }

    Ok(())
}

async fn handle_apply(
    context: &CliContext,
    file: Option<PathBuf>,
    actor: &ActorContext,
    json: bool,
) -> Result<()> {
    let raw = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read mutation from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read mutation from stdin")?;
            buf
        }
    };
    let mutation: Mutation = serde_json::from_str(&raw).context("invalid mutation JSON")?;
    info!(label = %mutation.status_label(), "applying mutation");

    let outcome = match context.service.apply(mutation, actor).await {
        Ok(outcome) => outcome,
        Err(err) => {
            if json {
                print_json(&err.to_response())?;
            }
            return Err(err).context("mutation rejected");
        }
    };

    if json {
        print_json(&outcome)?;
    } else {
        println!(
            "{} committed for {} (audit {})",
            outcome.audit.status_label, outcome.audit.target_document_id, outcome.audit.id
        );
    }
    Ok(())
}

async fn handle_po_command(
    context: &CliContext,
    command: PoCommands,
    actor: &ActorContext,
    json: bool,
) -> Result<()> {
    let service = &context.service;
    match command {
        PoCommands::Submit { po_id } => {
            let header = service.submit_po(&po_id, actor).await.context("failed to submit PO")?;
            render_header(&header, json)?;
        }
        PoCommands::Approve { po_id } => {
            let header = service.approve_po(&po_id, actor).await.context("failed to approve PO")?;
            render_header(&header, json)?;
        }
        PoCommands::Reject { po_id, reason } => {
            let header = service
                .reject_po(&po_id, &reason, actor)
                .await
                .context("failed to reject PO")?;
            render_header(&header, json)?;
        }
        PoCommands::Close { po_id } => {
            let header = service.close_po(&po_id, actor).await.context("failed to close PO")?;
            render_header(&header, json)?;
        }
        PoCommands::Total { po_id } => {
            let total = service.get_po_total(&po_id).await.context("failed to load PO total")?;
            if json {
                print_json(&serde_json::json!({ "po_id": po_id, "total_value": total }))?;
            } else {
                println!("{}", total);
            }
        }
        PoCommands::Status { po_id } => {
            let status = service.get_po_status(&po_id).await.context("failed to load PO status")?;
            if json {
                print_json(&serde_json::json!({ "po_id": po_id, "status": status }))?;
            } else {
                match status {
                    Some(status) => println!("{}", status),
                    None => println!("UNKNOWN"),
                }
            }
        }
        PoCommands::Match { po_id } => {
            let lines = service
                .three_way_match(&po_id)
                .await
                .context("failed to build three-way match")?;
            if json {
                print_json(&lines)?;
            } else if lines.is_empty() {
                println!("PO {} has no lines", po_id);
            } else {
                for line in lines {
                    println!(
                        "- line {} • ordered {} • received {} • invoiced {} • {}",
                        line.line_number,
                        line.ordered_qty,
                        line.received_qty,
                        line.invoiced_qty,
                        line.status
                    );
                }
            }
        }
    }
    Ok(())
}

async fn handle_vendor_command(
    context: &CliContext,
    command: VendorCommands,
    actor: &ActorContext,
    json: bool,
) -> Result<()> {
    let service = &context.service;
    match command {
        VendorCommands::Activate { vm_id } => {
            let vendor = service
                .activate_vendor(&vm_id, actor)
                .await
                .context("failed to activate vendor")?;
            render_vendors(&[vendor], json)?;
        }
        VendorCommands::Deactivate { vm_id } => {
            let vendor = service
                .deactivate_vendor(&vm_id, actor)
                .await
                .context("failed to deactivate vendor")?;
            render_vendors(&[vendor], json)?;
        }
        VendorCommands::Exists { code } => {
            let exists = service.vendor_exists(&code).await.context("failed to look up vendor")?;
            if json {
                print_json(&serde_json::json!({ "code": code, "exists": exists }))?;
            } else {
                println!("{}", exists);
            }
        }
        VendorCommands::Active => {
            let vendors = service
                .get_active_vendors()
                .await
                .context("failed to list active vendors")?;
            render_vendors(&vendors, json)?;
        }
    }
    Ok(())
}

async fn handle_material_command(
    context: &CliContext,
    command: MaterialCommands,
    actor: &ActorContext,
    json: bool,
) -> Result<()> {
    let service = &context.service;
    match command {
        MaterialCommands::Activate { mm_id } => {
            let material = service
                .activate_material(&mm_id, actor)
                .await
                .context("failed to activate material")?;
            render_materials(&[material], json)?;
        }
        MaterialCommands::Deactivate { mm_id } => {
            let material = service
                .deactivate_material(&mm_id, actor)
                .await
                .context("failed to deactivate material")?;
            render_materials(&[material], json)?;
        }
        MaterialCommands::Active => {
            let materials = service
                .get_active_materials()
                .await
                .context("failed to list active materials")?;
            render_materials(&materials, json)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_header(header: &po_headers::Model, json: bool) -> Result<()> {
    if json {
        return print_json(header);
    }
    println!(
        "PO {} • status {} • total {}",
        header.po_id, header.status, header.total_value
    );
    if let Some(approver) = &header.approved_by {
        println!("  approved by {}", approver);
    }
    if let Some(remarks) = &header.remarks {
        println!("  remarks: {}", remarks);
    }
    Ok(())
}

fn render_vendors(vendors: &[vendors::Model], json: bool) -> Result<()> {
    if json {
        return print_json(&vendors);
    }
    for vendor in vendors {
        println!(
            "- {} • {} • {} • {}",
            vendor.vm_id,
            vendor.code,
            vendor.name.as_deref().unwrap_or("-"),
            vendor.is_active
        );
    }
    Ok(())
}

fn render_materials(materials: &[materials::Model], json: bool) -> Result<()> {
    if json {
        return print_json(&materials);
    }
    for material in materials {
        println!(
            "- {} • {} • {} • {}",
            material.mm_id,
            material.code,
            material.description.as_deref().unwrap_or("-"),
            material.is_active
        );
    }
    Ok(())
}
