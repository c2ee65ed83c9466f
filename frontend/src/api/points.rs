use chrono::NaiveDate;
use reqwest::Method;

use super::{client::ApiClient, errors::ApiError, types::Point};

impl ApiClient {
    pub async fn points_of_day(&self, date: NaiveDate) -> Result<Vec<Point>, ApiError> {
        let day = date.format("%Y-%m-%d").to_string();
        self.send_json(self.request(Method::GET, &["point", &day]))
            .await
    }
}
