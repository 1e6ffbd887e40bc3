//! Weekly insights and revenue forecasts
//!
//! Both endpoints sit behind the gate on the free tier: 40 free calls per
//! business, then 402 with the package catalog.

use crate::error::ApiError;
use crate::models::{
    AssumedLifts, BestTimes, ForecastRequest, ForecastResponse, SuggestedPost, WeeklyInsights,
    WelcomeRequest,
};
use crate::AppState;
use alice_tenant::FREE_PACKAGE;
use axum::extract::State;
use axum::Json;
use chrono::Utc;

const PAYDAY_BOOST: f64 = 0.12;
const TREND_BOOST: f64 = 0.05;

/// What to post, when, and where this week.
pub async fn weekly(
    State(state): State<AppState>,
    Json(req): Json<WelcomeRequest>,
) -> Result<Json<WeeklyInsights>, ApiError> {
    let business_id = state.gate.pass(&req.identity, FREE_PACKAGE)?;
    let industry = state
        .directory
        .get(&business_id)
        .map(|b| b.industry)
        .unwrap_or_else(|| "general".into());

    Ok(Json(WeeklyInsights {
        business_id,
        week_of: Utc::now().format("%Y-%m-%d").to_string(),
        industry: industry.clone(),
        trends: vec![
            "Payday promos boost conversions (15th, 25th–30th)",
            "Short-form video (15–30s) outperforms",
            "UGC/testimonials increase trust",
        ],
        suggested_posts: vec![
            SuggestedPost {
                platform: "Instagram",
                day: "Thu",
                time: "18:00",
                caption: format!(
                    "Payday glow-up ✨ Book now & save 10%. #PaydaySpecial #{industry}"
                ),
            },
            SuggestedPost {
                platform: "TikTok",
                day: "Sat",
                time: "11:00",
                caption: format!("Behind the scenes + quick tips 🎥 #{industry}Tips"),
            },
            SuggestedPost {
                platform: "Facebook",
                day: "Tue",
                time: "12:30",
                caption: "Client story + referral rewards 💬 #HappyClients".into(),
            },
        ],
        best_times: BestTimes {
            instagram: vec!["18:00"],
            tiktok: vec!["11:00"],
            facebook: vec!["12:30"],
        },
    }))
}

/// Simple weekly revenue projection with payday and trend lifts.
pub async fn forecast(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let business_id = state.gate.pass(&req.identity, FREE_PACKAGE)?;

    let baseline = req.baseline_weekly_revenue.unwrap_or(10_000.0);
    let spend = req.marketing_spend.unwrap_or(1_500.0);
    let projected = (baseline * (1.0 + PAYDAY_BOOST + TREND_BOOST)).round();
    let roi = ((projected - baseline) - spend) / spend.max(1.0);

    Ok(Json(ForecastResponse {
        business_id,
        baseline_weekly_revenue: baseline,
        projected_weekly_revenue: projected,
        assumed_lifts: AssumedLifts {
            payday_boost: PAYDAY_BOOST,
            trend_boost: TREND_BOOST,
        },
        marketing_spend: spend,
        estimated_roi: (roi * 100.0).round() / 100.0,
    }))
}
