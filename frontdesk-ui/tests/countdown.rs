use std::time::Duration;

use chrono::Utc;
use frontdesk_ui::countdown::Countdown;

#[tokio::test]
async fn test_past_target_stops_after_the_first_tick() {
    let countdown = Countdown::start(Utc::now() - chrono::Duration::seconds(1));

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(!countdown.is_running());
    // never a negative duration; expiry publishes the terminal None
    assert!(countdown.remaining().is_none());
}

#[tokio::test]
async fn test_future_target_publishes_and_can_be_stopped() {
    let countdown = Countdown::start(Utc::now() + chrono::Duration::seconds(30));

    tokio::time::sleep(Duration::from_millis(100)).await;

    let remaining = countdown.remaining().expect("still counting");
    assert_eq!(remaining.hours, 0);
    assert!(remaining.seconds > 0 || remaining.minutes > 0);
    assert!(countdown.is_running());

    countdown.stop();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!countdown.is_running());
}
