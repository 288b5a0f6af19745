use anyhow::{Context, Result, bail};
use rand::seq::SliceRandom;
use std::io::{self, Write};
use tracing::debug;

use leetcode_cli::api::LeetCodeClient;
use leetcode_cli::config::Config;
use leetcode_cli::export;

use crate::{ListArgs, ShowArgs};

pub async fn show(client: &LeetCodeClient, config: &Config, args: ShowArgs) -> Result<()> {
    let slug = resolve_slug(client, &args).await?;
    debug!(%slug, "fetching problem detail");

    let detail = client
        .fetch_problem_detail(&slug)
        .await?
        .with_context(|| format!("problem '{slug}' not found"))?;

    if !args.generate {
        let mut out = io::stdout().lock();
        export::export_stdout(&detail, &mut out)?;
        return Ok(());
    }

    let mut language = args.language.unwrap_or_else(|| config.language.clone());
    if language.starts_with('.') {
        language = detail.language_slug(&language)?.to_string();
    }

    let path = export::generate(&config.expanded_workspace(), &detail, &language)?;
    println!("{}", path.display());
    Ok(())
}

async fn resolve_slug(client: &LeetCodeClient, args: &ShowArgs) -> Result<String> {
    if let Some(title) = &args.title {
        return Ok(title.clone());
    }

    let list = client.fetch_problems().await?;
    if let Some(id) = args.id {
        let problem = list
            .find_by_frontend_id(id)
            .with_context(|| format!("no problem with id {id}"))?;
        return Ok(problem.stat.title_slug.clone());
    }

    match list.stat_status_pairs.choose(&mut rand::thread_rng()) {
        Some(problem) => Ok(problem.stat.title_slug.clone()),
        None => bail!("problem list is empty"),
    }
}

pub async fn list(client: &LeetCodeClient, args: ListArgs) -> Result<()> {
    let list = client.fetch_problems().await?;
    let mut out = io::stdout().lock();

    if args.summary {
        writeln!(out, "User:   {}", list.user_name)?;
        writeln!(out, "Solved: {}/{}", list.num_solved, list.num_total)?;
        writeln!(out, "  Easy:   {}", list.ac_easy)?;
        writeln!(out, "  Medium: {}", list.ac_medium)?;
        writeln!(out, "  Hard:   {}", list.ac_hard)?;
        return Ok(());
    }

    let mut problems: Vec<_> = list
        .stat_status_pairs
        .iter()
        .filter(|p| p.matches_status(&args.status) && p.matches_lock(&args.lock))
        .collect();
    problems.sort_by_key(|p| p.stat.frontend_question_id);

    for problem in problems {
        writeln!(out, "{}", problem.listing_line())?;
    }
    Ok(())
}
