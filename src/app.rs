use crate::cli::{Cli, View, parse_command};
use crate::error::AppError;
use crate::output::{
    ViewOptions, output_json, print_activity_tables, print_summary_line, print_summary_table,
    print_users_table,
};
use crate::source::{Report, discover_sources, load_reports};

/// Fail early when `--user` names someone absent from a transcript
fn check_user(reports: &[Report], user: Option<&str>, view: View) -> Result<(), AppError> {
    let Some(name) = user else {
        return Ok(());
    };
    if view == View::Activity {
        return Ok(());
    }
    match reports.iter().find(|r| r.stats.users.get(name).is_none()) {
        Some(report) => Err(AppError::UnknownUser {
            name: name.to_string(),
            path: report.name.clone(),
        }),
        None => Ok(()),
    }
}

fn print_report(report: &Report, view: View, opts: ViewOptions<'_>, show_name: bool) {
    if show_name {
        println!("\n{}", report.name);
    }
    match view {
        View::Summary => print_summary_table(&report.name, &report.stats, opts),
        View::Users => print_users_table(&report.stats, opts),
        View::Activity => print_activity_tables(&report.stats, opts),
    }
    print_summary_line(
        report.stats.total_messages,
        report.lines,
        report.stats.skipped_messages,
        report.elapsed_ms,
        opts.use_color,
    );
}

pub(crate) fn run(mut cli: Cli) -> Result<(), AppError> {
    let (view, paths) = parse_command(cli.command.take(), std::mem::take(&mut cli.input));
    let sources = discover_sources(&paths)?;
    let reports = load_reports(&sources, cli.timestamp_policy(), cli.is_quiet())?;

    let user = cli.user.as_deref();
    check_user(&reports, user, view)?;

    let opts = ViewOptions {
        use_color: cli.use_color(),
        compact: cli.compact,
        top: cli.top(),
        user,
    };

    if cli.json {
        println!("{}", output_json(&reports, view, opts));
        return Ok(());
    }

    let show_name = reports.len() > 1 && view != View::Summary;
    for report in &reports {
        if report.stats.users.is_empty() {
            println!("No messages found in {}.", report.name);
            continue;
        }
        print_report(report, view, opts, show_name);
    }
    Ok(())
}
