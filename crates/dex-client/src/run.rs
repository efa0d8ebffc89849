use {
    crate::{
        domain::{Token, analytics, liquidity::add},
        infra::{
            cli::{Args, Command},
            config,
            snapshot,
            store::AppState,
        },
        views,
    },
    anyhow::Result,
    clap::Parser,
    serde::Serialize,
};

pub async fn start(args: impl IntoIterator<Item = String>) {
    let args = Args::parse_from(args);
    let format = if args.log_json {
        observe::tracing::Format::Json
    } else {
        observe::tracing::Format::Text
    };
    observe::tracing::initialize(&args.log_filter, format);
    observe::panic_hook::install();
    tracing::info!("running dex client with {args:#?}");

    if let Err(err) = run(args).await {
        tracing::error!(?err, "dex client failed");
        std::process::exit(1);
    }
}

pub async fn run(args: Args) -> Result<()> {
    let mut chain = config::load(&args.config, args.chain_id).await?;
    if let Some(path) = &args.imported_tokens {
        let tokens: Vec<Token> = snapshot::read(path).await?;
        chain.import_tokens(tokens);
    }

    match args.command {
        Command::AddLiquidity {
            token_a,
            token_b,
            amount_a,
            amount_b,
        } => {
            let token_a = match token_a {
                Some(token) => chain.token(&token)?,
                None => chain.native_token.clone(),
            };
            let mut form = add::Form::new(Some(token_a));
            if let Some(token) = token_b {
                form.select_b(chain.token(&token)?);
            }
            form.set_amount_a(amount_a);
            form.set_amount_b(amount_b);
            print(&views::AddLiquidity::new(&form))
        }
        Command::RemoveLiquidity {
            state,
            token_a,
            token_b,
            percent,
        } => {
            let state: AppState = snapshot::read(&state).await?;
            let (a, b) = match token_a.zip(token_b) {
                Some((a, b)) => (chain.token(&a)?, chain.token(&b)?),
                None => chain.default_pool.clone(),
            };
            print(&views::RemoveLiquidity::new(&chain, &state, a, b, &percent))
        }
        Command::Farm { state, name } => {
            let state: AppState = snapshot::read(&state).await?;
            let farms = match name {
                Some(name) => vec![views::Farm::new(&chain, &state, &name, chain.farm(&name)?)],
                None => views::Farm::all(&chain, &state),
            };
            print(&farms)
        }
        Command::Transactions {
            feed,
            filter,
            page,
            oldest_first,
        } => {
            let feed: analytics::TransactionFeed = snapshot::read(&feed).await?;
            let mut table = analytics::Table::new(feed);
            table.set_filter(filter);
            if oldest_first {
                table.toggle_time_sort();
            }
            table.go_to(page.saturating_sub(1));
            print(&views::Transactions::new(&table, chrono::Utc::now()))
        }
    }
}

fn print(view: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}
