//! End-to-end flows through the application: keys in, HTTP out, state back

mod common;

use axum::http::StatusCode;
use common::{spawn_referral_server, test_config, unreachable_base_url, valid_form};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use refer_earn::{
    referral::{status::FAILURE_MESSAGE, Field, FormData, SubmitStatus, WidgetStage},
    App,
};
use std::time::Duration;
use tokio::time::timeout;

const EVENT_WAIT: Duration = Duration::from_secs(5);

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn submit(app: &mut App) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
        .unwrap();
}

/// Open the modal and type `form` field by field
fn open_and_fill(app: &mut App, form: &FormData) {
    press(app, KeyCode::Char('r'));
    assert!(app.state().referral.is_open());

    for field in Field::ALL {
        if field == Field::Course {
            let target = form.course.as_str();
            for _ in 0..4 {
                if app.state().referral.form().course == target {
                    break;
                }
                press(app, KeyCode::Right);
            }
        } else {
            for c in form.get(field).chars() {
                press(app, KeyCode::Char(c));
            }
        }
        press(app, KeyCode::Tab);
    }
}

async fn app_for(base_url: &str) -> App {
    App::new(test_config(base_url)).unwrap()
}

#[tokio::test]
async fn test_scenario_a_success_clears_and_closes() {
    let server = spawn_referral_server(StatusCode::OK).await;
    let mut app = app_for(&server.base_url).await;

    open_and_fill(&mut app, &valid_form());
    assert_eq!(app.state().referral.form(), &valid_form());

    submit(&mut app);
    assert_eq!(app.state().referral.stage(), WidgetStage::Submitting);

    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());
    let widget = &app.state().referral;
    assert_eq!(widget.status(), &SubmitStatus::success());
    assert_eq!(
        widget.status().message(),
        Some("Referral submitted successfully!")
    );
    assert!(widget.form().is_empty());
    assert!(widget.is_open());

    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());
    assert!(!app.state().referral.is_open());

    let received = server.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].body["refereeName"], "Bo");
}

#[tokio::test]
async fn test_scenario_b_bad_email_sends_nothing() {
    let server = spawn_referral_server(StatusCode::OK).await;
    let mut app = app_for(&server.base_url).await;

    let mut form = valid_form();
    form.referee_email = "not-an-email".to_string();
    open_and_fill(&mut app, &form);
    submit(&mut app);

    let errors = app.state().referral.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::RefereeEmail), Some("Invalid email format"));
    assert_eq!(app.state().referral.status(), &SubmitStatus::None);

    assert!(timeout(Duration::from_millis(200), app.next_background_event())
        .await
        .is_err());
    assert!(server.received().await.is_empty());
}

#[tokio::test]
async fn test_scenario_c_empty_form_reports_all_fields() {
    let server = spawn_referral_server(StatusCode::OK).await;
    let mut app = app_for(&server.base_url).await;

    press(&mut app, KeyCode::Enter);
    submit(&mut app);

    let errors = app.state().referral.errors();
    assert_eq!(errors.len(), 5);
    for field in Field::ALL {
        assert!(errors.contains(field), "{:?} should be reported", field);
    }
    assert!(server.received().await.is_empty());
}

#[tokio::test]
async fn test_any_single_blank_field_is_reported_and_nothing_is_sent() {
    let server = spawn_referral_server(StatusCode::OK).await;

    for field in Field::ALL {
        let mut app = app_for(&server.base_url).await;
        let mut form = valid_form();
        form.set(field, "");

        open_and_fill(&mut app, &form);
        submit(&mut app);

        let errors = app.state().referral.errors();
        assert_eq!(errors.len(), 1, "{:?}", field);
        assert!(errors.contains(field), "{:?} should be reported", field);
        assert_eq!(app.state().referral.stage(), WidgetStage::Invalid);
    }

    assert!(server.received().await.is_empty());
}

#[tokio::test]
async fn test_scenario_d_server_failure_keeps_data() {
    let server = spawn_referral_server(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut app = app_for(&server.base_url).await;

    open_and_fill(&mut app, &valid_form());
    submit(&mut app);
    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());

    let widget = &app.state().referral;
    assert_eq!(widget.status().message(), Some(FAILURE_MESSAGE));
    assert_eq!(widget.form(), &valid_form());
    assert!(widget.is_open());

    assert!(timeout(Duration::from_millis(200), app.next_background_event())
        .await
        .is_err());
    assert!(app.state().referral.is_open());
}

#[tokio::test]
async fn test_transport_failure_shows_same_banner() {
    let base_url = unreachable_base_url().await;
    let mut app = app_for(&base_url).await;

    open_and_fill(&mut app, &valid_form());
    submit(&mut app);
    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());

    assert_eq!(app.state().referral.status(), &SubmitStatus::failure());
    assert_eq!(app.state().referral.form(), &valid_form());
}

#[tokio::test]
async fn test_retry_after_failure_reuses_entered_data() {
    let server = spawn_referral_server(StatusCode::BAD_GATEWAY).await;
    let mut app = app_for(&server.base_url).await;

    open_and_fill(&mut app, &valid_form());
    submit(&mut app);
    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());
    submit(&mut app);
    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());

    let received = server.received().await;
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, received[1].body);
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let server = spawn_referral_server(StatusCode::OK).await;
    let mut app = app_for(&server.base_url).await;

    open_and_fill(&mut app, &valid_form());
    submit(&mut app);
    submit(&mut app);

    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());
    assert!(app.state().referral.status().is_success());
    assert_eq!(server.received().await.len(), 1);
}

#[tokio::test]
async fn test_escape_closes_and_reopen_clears_banner() {
    let server = spawn_referral_server(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut app = app_for(&server.base_url).await;

    open_and_fill(&mut app, &valid_form());
    submit(&mut app);
    assert!(timeout(EVENT_WAIT, app.next_background_event()).await.unwrap());
    assert!(app.state().referral.status().is_error());

    press(&mut app, KeyCode::Esc);
    assert!(!app.state().referral.is_open());
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().referral.status(), &SubmitStatus::None);
    assert_eq!(app.state().referral.form(), &valid_form());
}

#[tokio::test]
async fn test_quit_from_landing_disposes_widget() {
    let server = spawn_referral_server(StatusCode::OK).await;
    let mut app = app_for(&server.base_url).await;

    press(&mut app, KeyCode::Char('q'));

    assert!(app.state().should_quit());
    assert!(app.state().referral.is_disposed());
}
