//! Plain-text detailed findings report (`detailed_findings.txt`).

use std::io::{self, Write};

use passa_core::models::AccountDetail;
use passa_data::findings::Findings;

use crate::console::POLICY_RECOMMENDATIONS;

const SECTION_RULE: usize = 30;

/// Which raw columns to print under each listed account.
#[derive(Debug, Clone, Copy)]
enum Columns {
    ChangedCreatedLogon,
    CreatedLogon,
    CreatedChanged,
    LogonCreatedChanged,
}

/// Write the detailed findings report, naming every account behind the
/// headline counts.
pub fn write_detailed_report<W: Write>(
    out: &mut W,
    findings: &Findings<'_>,
    total_accounts: usize,
) -> io::Result<()> {
    writeln!(out, "DETAILED SECURITY FINDINGS REPORT")?;
    writeln!(out, "{}\n", "=".repeat(50))?;

    section(out, "CRITICAL PASSWORD AGE FINDINGS")?;
    writeln!(out, "\n1. Accounts with passwords over 20 years old:")?;
    accounts(out, &findings.passwords_over_20_years, Columns::ChangedCreatedLogon)?;
    writeln!(out, "\n2. Accounts with passwords over 15 years old:")?;
    accounts(out, &findings.passwords_over_15_years, Columns::ChangedCreatedLogon)?;

    writeln!(out)?;
    section(out, "PASSWORD NEVER CHANGED")?;
    accounts(out, &findings.never_changed_password, Columns::CreatedLogon)?;

    writeln!(out)?;
    section(out, "LOGON ISSUES")?;
    writeln!(out, "\n1. Accounts that have never logged in:")?;
    accounts(out, &findings.never_logged_in, Columns::CreatedChanged)?;
    writeln!(out, "\n2. Accounts inactive for over 1 year:")?;
    accounts(out, &findings.inactive_over_1_year, Columns::LogonCreatedChanged)?;

    writeln!(out)?;
    section(out, "RECOMMENDED ACTIONS")?;
    writeln!(out, "\n1. Immediate Actions Required:")?;
    writeln!(out, "   - Reset passwords for all accounts listed in the '20+ years' section")?;
    writeln!(out, "   - Review and reset passwords for accounts in the '15+ years' section")?;
    writeln!(out, "   - Review and reset passwords for accounts with passwords over 1 year old")?;
    writeln!(out, "   - Review all accounts that have never had their passwords changed\n")?;
    writeln!(out, "2. Account Cleanup:")?;
    writeln!(out, "   - Review and consider disabling accounts that have never logged in")?;
    writeln!(out, "   - Audit accounts inactive for over 1 year")?;
    writeln!(
        out,
        "   - Consider implementing automatic account disable after 90 days of inactivity\n"
    )?;
    writeln!(out, "3. Policy Recommendations:")?;
    for policy in POLICY_RECOMMENDATIONS {
        writeln!(out, "   - {}", policy)?;
    }
    writeln!(out, "   - Regular account activity audits\n")?;

    writeln!(out)?;
    section(out, "SUMMARY OF FINDINGS")?;
    writeln!(out, "Total Accounts Analysed: {}", total_accounts)?;
    writeln!(
        out,
        "Accounts with passwords > 20 years: {}",
        findings.passwords_over_20_years.len()
    )?;
    writeln!(
        out,
        "Accounts with passwords > 15 years: {}",
        findings.passwords_over_15_years.len()
    )?;
    writeln!(
        out,
        "Accounts that never changed password: {}",
        findings.never_changed_password.len()
    )?;
    writeln!(
        out,
        "Accounts that never logged in: {}",
        findings.never_logged_in.len()
    )?;
    writeln!(
        out,
        "Accounts inactive > 1 year: {}",
        findings.inactive_over_1_year.len()
    )?;

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(SECTION_RULE))
}

fn accounts<W: Write>(out: &mut W, listed: &[&AccountDetail], columns: Columns) -> io::Result<()> {
    if listed.is_empty() {
        return writeln!(out, "   None found\n");
    }

    for detail in listed {
        writeln!(out, "   - {}", detail.name)?;
        let created = ("Account Created", detail.account_creation_raw.as_str());
        let changed = detail.last_password_change_raw.as_str();
        let logon = ("Last Logon", detail.last_logon_raw.as_str());
        let lines = match columns {
            Columns::ChangedCreatedLogon => vec![("Last Changed", changed), created, logon],
            Columns::CreatedLogon => vec![created, logon],
            Columns::CreatedChanged => vec![created, ("Last Password Change", changed)],
            Columns::LogonCreatedChanged => {
                vec![logon, created, ("Last Password Change", changed)]
            }
        };
        for (label, value) in lines {
            writeln!(out, "     {}: {}", label, value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use passa_core::models::{AccountRecord, RawAccount};

    fn details() -> Vec<AccountDetail> {
        [
            RawAccount::new(
                "CORP",
                "svc-legacy",
                "3 years, 0 months and 0 days",
                "22 years, 0 months and 0 days",
                "22 years, 0 months and 0 days",
            ),
            RawAccount::new("CORP", "alice", "2 days", "20 days", "4 years, 0 months and 0 days"),
        ]
        .into_iter()
        .map(|raw| AccountDetail::from(&AccountRecord::from_raw(raw)))
        .collect()
    }

    fn render(details: &[AccountDetail]) -> String {
        let findings = Findings::collect(details);
        let mut buf = Vec::new();
        write_detailed_report(&mut buf, &findings, details.len()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_detailed_report_lists_accounts() {
        let output = render(&details());

        assert!(output.starts_with("DETAILED SECURITY FINDINGS REPORT\n"));
        assert!(output.contains(
            "   - svc-legacy\n     Last Changed: 22 years, 0 months and 0 days\n"
        ));
        assert!(output.contains("Total Accounts Analysed: 2"));
        assert!(output.contains("Accounts with passwords > 20 years: 1"));
        assert!(output.contains("Accounts that never changed password: 1"));
        assert!(output.contains("Accounts inactive > 1 year: 1"));
        assert!(!output.contains("   - alice"));
    }

    #[test]
    fn test_detailed_report_empty_sections() {
        let output = render(&details()[1..]);
        assert!(output.contains("1. Accounts that have never logged in:\n   None found\n"));
        assert!(output.contains("Accounts with passwords > 15 years: 0"));
    }
}
