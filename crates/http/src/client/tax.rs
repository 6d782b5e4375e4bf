//! Tax summary endpoints.
//!
//! All figures are computed server-side; these calls only assemble URLs.
//! The optional start filters are appended to the query string only when
//! present.

use reqwest::Method;

use super::SessionClient;
use super::error::ClientError;
use crate::types::{AllMonthsResponse, MonthlyTax, TotalTaxResponse};

impl SessionClient {
    /// Tax summary for a single month
    pub async fn tax_for_month(&self, year: i32, month: u32) -> Result<MonthlyTax, ClientError> {
        let request = self
            .request(Method::GET, "/tax/month/")
            .query(&[("year", year.to_string()), ("month", month.to_string())]);
        self.execute(request).await
    }

    /// Per-month tax summaries, optionally starting from a given period
    pub async fn tax_for_all_months(
        &self,
        start_year: Option<i32>,
        start_month: Option<u32>,
    ) -> Result<AllMonthsResponse, ClientError> {
        let request = self
            .request(Method::GET, "/tax/all/")
            .query(&period_query(start_year, start_month));
        self.execute(request).await
    }

    /// Aggregate tax figures, optionally starting from a given period
    pub async fn total_tax(
        &self,
        start_year: Option<i32>,
        start_month: Option<u32>,
    ) -> Result<TotalTaxResponse, ClientError> {
        let request = self
            .request(Method::GET, "/tax/total/")
            .query(&period_query(start_year, start_month));
        self.execute(request).await
    }
}

fn period_query(start_year: Option<i32>, start_month: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(year) = start_year {
        params.push(("start_year", year.to_string()));
    }
    if let Some(month) = start_month {
        params.push(("start_month", month.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::period_query;

    #[test]
    fn period_query_skips_absent_filters() {
        assert!(period_query(None, None).is_empty());
        assert_eq!(
            period_query(Some(2024), None),
            vec![("start_year", "2024".to_string())]
        );
        assert_eq!(
            period_query(Some(2024), Some(7)),
            vec![
                ("start_year", "2024".to_string()),
                ("start_month", "7".to_string())
            ]
        );
    }
}
