use crate::AppState;
use crate::models::NewAlert;

/// Looks up the user by email, creating one on first submission, then
/// inserts the alert.
///
/// The lookup-then-insert pair is not atomic: two concurrent submissions
/// for a brand-new email can both pass the lookup and both insert a user.
/// Deduplication, if wanted, belongs to a unique constraint in the store.
pub async fn submit_alert(
    state: &AppState,
    email: &str,
    ticker: &str,
    rsi_min: f64,
    rsi_max: f64,
    macd_min: f64,
    macd_max: f64,
) -> Result<(), String> {
    let user_id = match state.registry.find_user_by_email(email).await? {
        Some(id) => id,
        None => state.registry.create_user(email).await?,
    };

    let alert = NewAlert {
        user_id,
        ticker: ticker.to_uppercase(),
        rsi_min,
        rsi_max,
        macd_min,
        macd_max,
    };

    state.registry.create_alert(&alert).await?;

    Ok(())
}
