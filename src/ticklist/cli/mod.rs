mod args;
mod print;
mod prompt;

use args::{Cli, Commands};
use clap::Parser;
use print::{print_messages, print_view};
use prompt::TermPrompter;
use ticklist::api::{
    Click, CmdMessage, CmdResult, Column, MessageLevel, PromptRequest, PromptResponse, TicklistApi,
};
use ticklist::error::Result;
use ticklist::init;
use ticklist::model::ListKind;
use ticklist::store::fs::FileStore;
use ticklist::view::ItemFilter;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TicklistApi<FileStore>,
    prompter: TermPrompter,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => handle_list(&mut ctx),
        Commands::Add { text } => handle_add(&mut ctx, text),
        Commands::Edit { row, text } => handle_edit(&mut ctx, row, text),
        Commands::Done { row, yes } => handle_transfer(&mut ctx, ListKind::Todo, row, yes),
        Commands::Reopen { row, yes } => handle_transfer(&mut ctx, ListKind::Pass, row, yes),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let filters = [
        (ListKind::Todo, &cli.todo_filter),
        (ListKind::Pass, &cli.pass_filter),
    ];
    // Both patterns must compile before the lists are opened: applying a
    // filter refreshes, and a refresh may save a re-sort.
    for (list, pattern) in filters {
        ItemFilter::compile(list, pattern)?;
    }

    let mut api = init::open(&cli.config)?;

    // Filters live only for this invocation.
    let mut messages = Vec::new();
    for (list, pattern) in filters {
        if !pattern.is_empty() {
            messages.extend(api.set_filter(list, pattern)?.messages);
        }
    }
    messages.retain(|m| m.level != MessageLevel::Info);
    print_messages(&messages);

    Ok(AppContext {
        api,
        prompter: TermPrompter::new(),
    })
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.refresh()?;
    print_messages(&result.messages);
    print_current_view(ctx)
}

fn handle_add(ctx: &mut AppContext, text: Option<String>) -> Result<()> {
    let add_row = ctx.api.view()?.todo.rows.len().saturating_sub(1);
    let click = Click::new(ListKind::Todo, Column::Label, add_row);
    match ctx.api.click(click)? {
        Some(request) => answer(ctx, &request, text.map(PromptResponse::Text)),
        None => Ok(()),
    }
}

fn handle_edit(ctx: &mut AppContext, row: usize, text: Option<String>) -> Result<()> {
    let click = Click::new(ListKind::Todo, Column::Label, row);
    match ctx.api.click(click)? {
        Some(request @ PromptRequest::Edit { .. }) => {
            answer(ctx, &request, text.map(PromptResponse::Text))
        }
        _ => no_row(ListKind::Todo, row),
    }
}

fn handle_transfer(ctx: &mut AppContext, list: ListKind, row: usize, yes: bool) -> Result<()> {
    let click = Click::new(list, Column::Action, row);
    match ctx.api.click(click)? {
        Some(request) => answer(ctx, &request, yes.then_some(PromptResponse::Accept)),
        None => no_row(list, row),
    }
}

/// Applies `preset` if given, otherwise asks on the terminal.
fn answer(
    ctx: &mut AppContext,
    request: &PromptRequest,
    preset: Option<PromptResponse>,
) -> Result<()> {
    let response = match preset {
        Some(response) => response,
        None => ctx.prompter.ask(request)?,
    };

    if response == PromptResponse::Cancel {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.respond(request, &response)?;
    finish(ctx, result)
}

fn finish(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    println!();
    print_current_view(ctx)
}

fn print_current_view(ctx: &mut AppContext) -> Result<()> {
    let view = ctx.api.view()?.clone();
    print_view(&view, ctx.api.session().filters());
    Ok(())
}

fn no_row(list: ListKind, row: usize) -> Result<()> {
    print_messages(&[CmdMessage::warning(format!(
        "No {} item at row {}",
        list, row
    ))]);
    Ok(())
}
