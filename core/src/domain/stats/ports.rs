use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    stats::value_objects::{
        FeedbackSnapshot, InventoryStatus, OptInOverview, TrendPoint, WasteForecastEntry,
    },
};

pub trait StatsService: Send + Sync {
    /// Organisation-wide participation trendline. Both dashboards render
    /// it, so any authenticated identity may ask.
    fn aggregate_trendline(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<TrendPoint>, CoreError>> + Send;

    /// The caller's own recent opt-in behaviour.
    fn opt_in_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<OptInOverview, CoreError>> + Send;

    fn waste_forecast(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<WasteForecastEntry>, CoreError>> + Send;

    /// Admin only.
    fn inventory_risk(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<InventoryStatus>, CoreError>> + Send;

    /// Admin only.
    fn feedback_snapshot(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<FeedbackSnapshot, CoreError>> + Send;
}
