use super::common::{print_error, print_info, print_warning, CliContext, ConsoleDialogs};
use super::completions;
use crate::encoding::encode_files;
use crate::panel::{ListView, Outcome, ServiceCard};
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Terminal admin panel for a services catalog REST API
#[derive(Parser, Debug)]
#[command(name = "catalog-admin", version, about = "Terminal admin panel for a services catalog REST API", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the API, e.g. https://example.com/api (overrides the config
    /// file and CATALOG_ADMIN_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered services
    List {
        /// Show description and image sources
        #[arg(short, long)]
        verbose: bool,
    },
    /// Add a new service
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        descricao: String,
        /// Price, e.g. 35.50
        #[arg(long)]
        preco: String,
        /// Duration in minutes
        #[arg(long)]
        duracao: String,
        /// Image file to attach (repeatable)
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,
    },
    /// Edit a service; unspecified fields keep their current value
    Update {
        /// Service id
        id: String,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        descricao: Option<String>,
        #[arg(long)]
        preco: Option<String>,
        #[arg(long)]
        duracao: Option<String>,
        /// Remove an existing image by its 1-based position in `list --verbose` (repeatable)
        #[arg(long = "drop-image", value_name = "INDEX")]
        drop_images: Vec<usize>,
        /// Image file to append (repeatable)
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,
    },
    /// Delete a service
    Delete {
        /// Service id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print files as base64 data URIs, one per line
    Encode {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
    /// Show where logs are written
    Logs,
    /// Show the configuration file location
    Config,
}

impl Cli {
    /// Execute the CLI command. `None` means no command was given and the
    /// TUI should start.
    pub fn execute(self) -> Result<Option<ExitCode>> {
        let api_base = self.api_base.as_deref();
        let code = match self.command {
            None => return Ok(None),
            Some(Commands::List { verbose }) => Self::cmd_list(api_base, verbose)?,
            Some(Commands::Create {
                nome,
                descricao,
                preco,
                duracao,
                images,
            }) => Self::cmd_create(api_base, [nome, descricao, preco, duracao], &images)?,
            Some(Commands::Update {
                id,
                nome,
                descricao,
                preco,
                duracao,
                drop_images,
                images,
            }) => Self::cmd_update(
                api_base,
                &id,
                [nome, descricao, preco, duracao],
                drop_images,
                &images,
            )?,
            Some(Commands::Delete { id, yes }) => Self::cmd_delete(api_base, &id, yes)?,
            Some(Commands::Encode { paths }) => Self::cmd_encode(&paths)?,
            Some(Commands::Completions { shell }) => {
                completions::generate(shell)?;
                ExitCode::SUCCESS
            }
            Some(Commands::Logs) => {
                let log_file = crate::utils::get_log_dir().join(crate::LOG_FILE_NAME);
                print_info(&format!("Logs are written to: {}", log_file.display()));
                print_info(&format!("View them with: tail -f {}", log_file.display()));
                ExitCode::SUCCESS
            }
            Some(Commands::Config) => {
                print_info(&crate::utils::get_config_path().display().to_string());
                ExitCode::SUCCESS
            }
        };
        Ok(Some(code))
    }

    fn cmd_list(api_base: Option<&str>, verbose: bool) -> Result<ExitCode> {
        info!("CLI: list command executed");
        let ctx = CliContext::load(api_base)?;
        let mut panel = ctx.panel()?;
        ctx.runtime.block_on(panel.load_services());

        match panel.container() {
            ListView::Failed => {
                print_error(crate::panel::messages::LOAD_FAILED);
                Ok(ExitCode::FAILURE)
            }
            ListView::Cards(cards) => {
                for card in cards {
                    print_card(card, verbose);
                }
                Ok(ExitCode::SUCCESS)
            }
            other => {
                print_info(other.placeholder().unwrap_or_default());
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    fn cmd_create(
        api_base: Option<&str>,
        [nome, descricao, preco, duracao]: [String; 4],
        images: &[PathBuf],
    ) -> Result<ExitCode> {
        info!("CLI: create command executed");
        let ctx = CliContext::load(api_base)?;
        let mut panel = ctx.panel()?;

        let form = panel.creation_form_mut();
        form.nome.set_text(nome);
        form.descricao.set_text(descricao);
        form.preco.set_text(preco);
        form.duracao.set_text(duracao);
        form.set_files(images.to_vec());

        let mut dialogs = ConsoleDialogs::new(true);
        let outcome = ctx.runtime.block_on(panel.create_service(&mut dialogs));
        Ok(exit_code(outcome))
    }

    fn cmd_update(
        api_base: Option<&str>,
        id: &str,
        [nome, descricao, preco, duracao]: [Option<String>; 4],
        mut drop_images: Vec<usize>,
        images: &[PathBuf],
    ) -> Result<ExitCode> {
        info!("CLI: update command executed for {}", id);
        let ctx = CliContext::load(api_base)?;
        let mut panel = ctx.panel()?;
        ctx.runtime.block_on(panel.load_services());

        if matches!(panel.container(), ListView::Failed) {
            print_error(crate::panel::messages::LOAD_FAILED);
            return Ok(ExitCode::FAILURE);
        }
        let Some(card) = panel.container_mut().card_mut(id) else {
            print_error(&format!("Serviço {} não encontrado.", id));
            return Ok(ExitCode::FAILURE);
        };

        let form = &mut card.form;
        for (input, value) in [
            (&mut form.nome, nome),
            (&mut form.descricao, descricao),
            (&mut form.preco, preco),
            (&mut form.duracao, duracao),
        ] {
            if let Some(value) = value {
                input.set_text(value);
            }
        }
        form.set_files(images.to_vec());

        // Highest first so earlier positions stay valid
        drop_images.sort_unstable_by(|a, b| b.cmp(a));
        drop_images.dedup();
        for position in drop_images {
            let removed = position
                .checked_sub(1)
                .and_then(|index| panel.remove_image(id, index));
            if removed.is_none() {
                print_warning(&format!("Imagem {} não existe no serviço {}.", position, id));
                return Ok(ExitCode::FAILURE);
            }
        }

        let mut dialogs = ConsoleDialogs::new(true);
        let outcome = ctx.runtime.block_on(panel.update_service(id, &mut dialogs));
        Ok(exit_code(outcome))
    }

    fn cmd_delete(api_base: Option<&str>, id: &str, yes: bool) -> Result<ExitCode> {
        info!("CLI: delete command executed for {}", id);
        let ctx = CliContext::load(api_base)?;
        let mut panel = ctx.panel()?;

        let mut dialogs = ConsoleDialogs::new(yes);
        let outcome = ctx.runtime.block_on(panel.delete_service(id, &mut dialogs));
        Ok(exit_code(outcome))
    }

    fn cmd_encode(paths: &[PathBuf]) -> Result<ExitCode> {
        let runtime = tokio::runtime::Runtime::new()?;
        match runtime.block_on(encode_files(paths)) {
            Ok(encoded) => {
                for data_url in encoded {
                    println!("{}", data_url);
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_error(&e.to_string());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn exit_code(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Done | Outcome::Cancelled => ExitCode::SUCCESS,
        Outcome::Rejected | Outcome::Failed => ExitCode::FAILURE,
    }
}

fn print_card(card: &ServiceCard, verbose: bool) {
    let form = &card.form;
    println!(
        "{}\t{}\tR$ {}\t{} min\t{} imagem(ns)",
        card.id(),
        form.nome.text(),
        form.preco.text(),
        form.duracao.text(),
        card.previews().len()
    );
    if verbose {
        println!("    {}", form.descricao.text());
        if !card.has_images() {
            println!("    {}", crate::panel::messages::NO_IMAGES);
        }
        for (i, preview) in card.previews().iter().enumerate() {
            println!("    {}. {}", i + 1, preview.src);
        }
    }
}
