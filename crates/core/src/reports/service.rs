//! Report assembly service.

use tracing::debug;

use super::error::ReportError;
use super::types::{AccountAgingInput, AccountAgingRow, AgedBalanceOptions, AgedBalanceReport};
use crate::aging::{AgingResult, AgingService};

/// Service for assembling multi-account reports.
pub struct ReportService;

impl ReportService {
    /// Assembles an aged balance report across many accounts.
    ///
    /// Each account is aged independently with its own rate, then rows are
    /// ordered by account code. When `suppress_zero` is set, rows whose
    /// unrounded total is within `zero_epsilon` of zero are dropped, and the
    /// grand totals cover only the retained rows.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NegativeEpsilon`] for a negative tolerance and
    /// propagates aging precondition failures (invalid thresholds, negative
    /// rate) from the first account that trips them.
    #[tracing::instrument(
        skip(accounts, options),
        fields(report = options.kind.as_str(), accounts = accounts.len())
    )]
    pub fn aged_balances(
        accounts: &[AccountAgingInput],
        options: &AgedBalanceOptions,
    ) -> Result<AgedBalanceReport, ReportError> {
        if options.zero_epsilon.is_sign_negative() {
            return Err(ReportError::NegativeEpsilon(options.zero_epsilon));
        }

        let mut rows = Vec::with_capacity(accounts.len());
        let mut suppressed = 0usize;
        for account in accounts {
            let result = AgingService::aggregate(
                &account.transactions,
                options.as_of,
                options.thresholds,
                options.show_all,
                account.rate,
            )?;

            if options.suppress_zero && result.is_zero_within(options.zero_epsilon) {
                suppressed += 1;
                continue;
            }
            rows.push(AccountAgingRow {
                account_id: account.account_id,
                code: account.code.clone(),
                name: account.name.clone(),
                result,
            });
        }
        rows.sort_by(|a, b| a.code.cmp(&b.code));

        let mut totals = AgingResult::default();
        for row in &rows {
            totals += row.result;
        }

        debug!(retained = rows.len(), suppressed, "assembled aged balances");

        Ok(AgedBalanceReport {
            report_type: options.kind.as_str().to_string(),
            as_of: options.as_of,
            currency: options.currency,
            thresholds: options.thresholds,
            rows,
            totals,
        })
    }
}
