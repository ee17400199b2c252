//! # CLI Layer
//!
//! One possible UI client for adboard. This is the only place that parses
//! arguments, reads stdin, writes to stdout and picks exit codes.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `handle_*()`: per-command handlers that call the API and render results
//!
//! Prompts come from [`Prompter`]; every prompt treats end of input as a
//! cancel, so `adboard add < /dev/null` publishes nothing.

use super::prompt::{PaymentChoice, Prompter};
use super::render::{
    line_width, print_messages, render_cards, render_config, render_header,
};
use super::setup::{AddArgs, Cli, Commands};
use adboard::api::{AdBoardApi, CmdMessage, ConfigAction};
use adboard::error::{AdBoardError, Result};
use adboard::init::{initialize, resolve_data_dir};
use adboard::model::{now_millis, AdDraft, DraftField};
use adboard::store::fs_backend::FsBackend;
use adboard::wizard::Step;
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct AppContext {
    api: AdBoardApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search.as_deref()),
        Some(Commands::Search { query }) => handle_list(&mut ctx, Some(&query.join(" "))),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "adboard=debug" } else { "adboard=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &cwd);
    let ctx = initialize(data_dir);
    AppContext { api: ctx.api }
}

fn handle_list(ctx: &mut AppContext, search: Option<&str>) -> Result<()> {
    let result = match search {
        Some(query) => ctx.api.search_ads(query)?,
        None => ctx.api.list_ads()?,
    };
    let width = line_width();
    println!("{}", render_header(width));
    if !result.listed_ads.is_empty() {
        println!("{}", render_cards(&result.listed_ads, width, now_millis()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let scripted = args.is_complete() && args.yes;
    let mut needs_input = !args.is_complete();
    let confirm_without_asking = args.yes;

    ctx.api.open_form(AdDraft::new(
        args.title.unwrap_or_default(),
        args.description.unwrap_or_default(),
        args.price.unwrap_or_default(),
        args.phone.unwrap_or_default(),
    ));
    let mut prompter = Prompter::stdio();

    if !scripted {
        println!("{}", "Add an ad".bold());
    }

    loop {
        let step = match ctx.api.form() {
            Some(form) => form.step(),
            None => return Ok(()),
        };

        match step {
            Step::Details => {
                if needs_input && !prompt_fields(ctx, &mut prompter)? {
                    return cancel_add(ctx);
                }
                match ctx.api.submit_details() {
                    Ok(result) => {
                        if !scripted {
                            print_messages(&result.messages);
                        }
                    }
                    Err(AdBoardError::Validation(e)) if !scripted => {
                        print_messages(&[CmdMessage::error(e.to_string())]);
                        needs_input = true;
                    }
                    Err(e) => {
                        ctx.api.cancel_form();
                        return Err(e);
                    }
                }
            }
            Step::Payment => {
                let choice = if confirm_without_asking {
                    PaymentChoice::Pay
                } else {
                    prompter.payment()?
                };
                match choice {
                    PaymentChoice::Pay => {
                        let result = ctx.api.confirm_payment()?;
                        print_messages(&result.messages);
                    }
                    PaymentChoice::Back => {
                        ctx.api.back_to_details()?;
                        needs_input = true;
                    }
                    PaymentChoice::Cancel => return cancel_add(ctx),
                }
            }
            Step::Done => {
                ctx.api.cancel_form();
                return Ok(());
            }
        }
    }
}

/// Asks for every field, showing current values. `false` when input ran out.
fn prompt_fields<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<bool> {
    for field in DraftField::all() {
        let current = match ctx.api.form() {
            Some(form) => form.draft().get(*field).to_string(),
            None => return Ok(false),
        };
        match prompter.ask(field.label(), field.hint(), &current)? {
            Some(value) => ctx.api.set_field(*field, value)?,
            None => return Ok(false),
        }
    }
    Ok(true)
}

fn cancel_add(ctx: &mut AppContext) -> Result<()> {
    println!();
    let result = ctx.api.cancel_form();
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if yes {
        let result = ctx.api.delete_ads(&selectors)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let ids = ctx.api.resolve_ads(&selectors)?;
    let mut prompter = Prompter::stdio();
    let width = line_width();

    for id in ids {
        let pending = ctx.api.request_delete(&id)?;
        println!("{}", render_cards(&pending.listed_ads, width, now_millis()));
        let confirmed = prompter.confirm("Delete ad?")?;
        let result = ctx.api.settle_delete(confirmed);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        println!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
