//! Security analysis report printed to the console.

use std::io::{self, Write};

use passa_core::formatting::{format_count_share, format_number, format_years, NOT_AVAILABLE};
use passa_core::metrics::FieldStatistics;
use passa_data::summary::StatisticsSummary;

const RULE_WIDTH: usize = 80;

/// Write the full security report for `summary` to `out`.
pub fn write_security_report<W: Write>(out: &mut W, summary: &StatisticsSummary) -> io::Result<()> {
    let total = summary.total_accounts;
    let password = &summary.password_age;
    let logon = &summary.last_logon;
    let account = &summary.account_age;

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "SECURITY ANALYSIS REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    // ── Domains ──────────────────────────────────────────────────────────────
    writeln!(out, "\nDOMAIN OVERVIEW")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Total Domains: {}", summary.total_domains)?;
    writeln!(out, "Total Accounts: {}", total)?;
    writeln!(out, "\nDomain Distribution:")?;
    for (domain, count) in &summary.domain_distribution {
        writeln!(out, "• {}: {} accounts ({:.1}%)", domain, count, summary.share(*count))?;
    }

    // ── Critical findings ────────────────────────────────────────────────────
    writeln!(out, "\nCRITICAL FINDINGS:")?;
    writeln!(
        out,
        "• {} accounts have passwords older than 20 years",
        format_count_share(over(password, "over_20_years"), total)
    )?;
    writeln!(
        out,
        "• {} accounts have passwords older than 15 years",
        format_count_share(over(password, "over_15_years"), total)
    )?;
    writeln!(
        out,
        "• {} accounts have never had their passwords changed",
        format_count_share(summary.never_changed_password, total)
    )?;
    writeln!(
        out,
        "• {} accounts haven't logged in for over 1 year",
        format_count_share(over(logon, "over_1_year"), total)
    )?;
    writeln!(
        out,
        "• {} accounts have never logged in",
        format_count_share(summary.never_logged_in, total)
    )?;

    // ── Metrics ──────────────────────────────────────────────────────────────
    writeln!(out, "\nPASSWORD AGE METRICS:")?;
    writeln!(out, "• Average password age: {}", format_years(password.mean()))?;
    writeln!(out, "• Median password age: {}", format_years(password.median()))?;
    writeln!(out, "• Oldest password: {}", format_years(password.max()))?;
    writeln!(out, "• Newest password: {}", format_years(password.min()))?;
    writeln!(out, "• Standard deviation: {}", format_years(password.std_dev()))?;

    writeln!(out, "\nLAST LOGON METRICS:")?;
    writeln!(out, "• Average time since last logon: {}", format_years(logon.mean()))?;
    writeln!(out, "• Median time since last logon: {}", format_years(logon.median()))?;
    writeln!(out, "• Longest time without logon: {}", format_years(logon.max()))?;
    writeln!(out, "• Most recent logon: {}", ago(logon.min()))?;

    writeln!(out, "\nACCOUNT AGE METRICS:")?;
    writeln!(out, "• Average account age: {}", format_years(account.mean()))?;
    writeln!(out, "• Oldest account: {}", format_years(account.max()))?;
    writeln!(out, "• Newest account: {}", format_years(account.min()))?;
    writeln!(
        out,
        "• Average gap between creation and last password change: {}",
        format_years(summary.age_difference.mean())
    )?;
    writeln!(
        out,
        "• Largest gap between creation and last password change: {}",
        format_years(summary.age_difference.max())
    )?;

    // ── Actions ──────────────────────────────────────────────────────────────
    writeln!(out, "\nRECOMMENDED ACTIONS:")?;
    writeln!(out, "1. Immediate password resets required for:")?;
    writeln!(
        out,
        "   - All accounts with passwords over 20 years old ({} accounts)",
        over(password, "over_20_years")
    )?;
    writeln!(
        out,
        "   - All accounts with passwords over 15 years old ({} accounts)",
        over(password, "over_15_years")
    )?;
    writeln!(out, "   - All accounts with passwords over 1 year old")?;
    writeln!(out, "2. Account cleanup required:")?;
    writeln!(
        out,
        "   - Review {} accounts inactive for over 1 year",
        over(logon, "over_1_year")
    )?;
    writeln!(
        out,
        "   - Review {} accounts that have never logged in",
        summary.never_logged_in
    )?;
    writeln!(out, "3. Implement or harden password policies:")?;
    for policy in POLICY_RECOMMENDATIONS {
        writeln!(out, "   - {}", policy)?;
    }
    writeln!(
        out,
        "4. Review all {} accounts that have never had password changes",
        summary.never_changed_password
    )?;

    // ── Compliance ───────────────────────────────────────────────────────────
    writeln!(out, "\nCOMPLIANCE METRICS:")?;
    writeln!(out, "Based on recommendations of 90-180 day maximum password age:")?;
    writeln!(
        out,
        "• Compliant accounts (≤ 90 days): {}",
        format_count_share(password.compliant(), total)
    )?;
    writeln!(
        out,
        "• Overdue for password change (> 90 days): {}",
        format_count_share(over(password, "over_90_days"), total)
    )?;
    if password.missing > 0 {
        writeln!(
            out,
            "• Unknown password age: {}",
            format_count_share(password.missing, total)
        )?;
    }
    writeln!(out, "\nExtended Compliance Metrics:")?;
    writeln!(
        out,
        "• Passwords > 1 year old: {}",
        format_count_share(over(password, "over_1_year"), total)
    )?;
    writeln!(
        out,
        "• Passwords > 2 years old: {}",
        format_count_share(over(password, "over_2_years"), total)
    )?;

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Password policy guidance shared by the console and detailed reports.
pub const POLICY_RECOMMENDATIONS: [&str; 7] = [
    "Maximum password age: 90-180 days",
    "Password complexity requirements",
    "Enable password expiry",
    "Use advanced password enforcers such as Entra Password Protection (Banned Passwords)",
    "Account lockout threshold of 3-5 attempts",
    "Locked account duration of 1 hour, or indefinite if culture and internal IT capabilities allow it",
    "Regular password audits",
];

fn over(stats: &FieldStatistics, label: &str) -> usize {
    stats.over(label).unwrap_or(0)
}

fn ago(years: Option<f64>) -> String {
    match years {
        Some(value) => format!("{} years ago", format_number(value, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
