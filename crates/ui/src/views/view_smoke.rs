use learn_core::model::{Language, OptionKey, UserRole, VideoId};
use serde_json::json;

use super::quiz::QuizIntent;
use super::test_harness::{
    CORRECT_KEY, FakeApi, ViewKind, login_json, named_quiz_json, quiz_json, setup_view_harness,
};

fn api_with_quiz() -> FakeApi {
    let api = FakeApi::default();
    *api.quiz.lock().unwrap() = Some(quiz_json(7, 2));
    api
}

#[tokio::test(flavor = "current_thread")]
async fn get_started_offers_both_roles_when_signed_out() {
    let mut harness = setup_view_harness(ViewKind::GetStarted, None, FakeApi::default()).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("I am a student"));
    assert!(html.contains("I am a teacher"));
    assert!(html.contains("/student/login"));
    assert!(html.contains("/teacher/login"));
}

#[tokio::test(flavor = "current_thread")]
async fn get_started_links_signed_in_user_to_dashboard() {
    let mut harness =
        setup_view_harness(ViewKind::GetStarted, Some(UserRole::Teacher), FakeApi::default())
            .await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Simran Kaur"));
    assert!(html.contains("/teacher/dashboard"));
    assert!(!html.contains("/student/login"));
}

#[tokio::test(flavor = "current_thread")]
async fn guarded_view_renders_nothing_without_session() {
    let mut harness = setup_view_harness(ViewKind::QuizCenter, None, api_with_quiz()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Quiz center"));
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_cannot_open_student_pages() {
    let mut harness =
        setup_view_harness(ViewKind::StudentDashboard, Some(UserRole::Teacher), FakeApi::default())
            .await;
    harness.rebuild();
    harness.settle().await;

    assert!(!harness.render().contains("My learning"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_center_lists_catalog() {
    let api = FakeApi::default();
    *api.catalog.lock().unwrap() = vec![
        json!({"id": 7, "name": "Computer Basics", "subject": "computer_basics",
               "time_limit": 10, "question_count": 5, "difficulty": "beginner"}),
        json!({"id": 8, "title": "Safe Browsing", "subject": "internet_safety"}),
    ];
    let mut harness = setup_view_harness(ViewKind::QuizCenter, Some(UserRole::Student), api).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Computer Basics"));
    assert!(html.contains("Safe Browsing"));
    assert!(html.contains("5 questions · 10 min"));
    assert!(html.contains("/student/quiz/7"));
    assert!(html.contains("Take quiz"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_center_shows_empty_state() {
    let mut harness =
        setup_view_harness(ViewKind::QuizCenter, Some(UserRole::Student), FakeApi::default())
            .await;
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("No quizzes available right now."));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_runs_from_intro_to_result() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz(7), Some(UserRole::Student), api_with_quiz()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Computer Basics"));
    assert!(html.contains("Start quiz"));
    assert!(html.contains("10 min"));

    harness.quiz(QuizIntent::Start);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Time left: 10:00"));
    assert!(html.contains("1 / 2"));
    assert!(html.contains("Question 1"));
    assert!(html.contains("Keyboard"));

    harness.quiz(QuizIntent::Select {
        question: 0,
        key: OptionKey::new(CORRECT_KEY).unwrap(),
    });
    harness.settle().await;
    assert!(harness.render().contains("option selected"));

    harness.quiz(QuizIntent::Next);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("2 / 2"));
    assert!(html.contains("quiz-submit"));

    harness.quiz(QuizIntent::Submit);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz complete"));
    assert!(html.contains("50%"));
    assert!(html.contains("1 / 2 correct"));

    let submissions = harness.api.submissions.lock().unwrap().clone();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].get("0").map(String::as_str), Some(CORRECT_KEY));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_keeps_answers_and_offers_retry() {
    let api = api_with_quiz();
    *api.fail_submit.lock().unwrap() = Some("connection reset".into());
    let mut harness = setup_view_harness(ViewKind::Quiz(7), Some(UserRole::Student), api).await;
    harness.rebuild();
    harness.settle().await;

    harness.quiz(QuizIntent::Start);
    harness.settle().await;
    harness.quiz(QuizIntent::Select {
        question: 0,
        key: OptionKey::new("A").unwrap(),
    });
    harness.settle().await;
    harness.quiz(QuizIntent::Submit);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Could not submit your answers."));
    assert!(html.contains("quiz-retry-submit"));
    assert!(html.contains("option selected"));

    *harness.api.fail_submit.lock().unwrap() = None;
    harness.quiz(QuizIntent::Submit);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz complete"));
    assert!(html.contains("0%"));
}

#[tokio::test(flavor = "current_thread")]
async fn switching_quiz_id_loads_the_new_quiz() {
    let api = api_with_quiz();
    api.quizzes_by_id
        .lock()
        .unwrap()
        .insert(8, named_quiz_json(8, "Safe Browsing", 3));
    let mut harness = setup_view_harness(ViewKind::Quiz(7), Some(UserRole::Student), api).await;
    harness.rebuild();
    harness.settle().await;
    harness.quiz(QuizIntent::Start);
    harness.settle().await;
    assert!(harness.render().contains("1 / 2"));

    harness.show(ViewKind::Quiz(8));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Safe Browsing"));
    assert!(html.contains("Start quiz"));
    assert!(!html.contains("Computer Basics"));

    harness.quiz(QuizIntent::Start);
    harness.settle().await;
    assert!(harness.render().contains("1 / 3"));
}

#[tokio::test(flavor = "current_thread")]
async fn missing_quiz_flashes_notice() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz(404), Some(UserRole::Student), FakeApi::default())
            .await;
    harness.rebuild();
    harness.settle().await;

    assert_eq!(
        harness.pending_notice().as_deref(),
        Some("That quiz could not be found.")
    );
    assert!(!harness.render().contains("Start quiz"));
}

#[tokio::test(flavor = "current_thread")]
async fn login_with_wrong_account_type_shows_notice() {
    let api = FakeApi::default();
    *api.login_response.lock().unwrap() = Some(login_json("teacher"));
    let mut harness = setup_view_harness(ViewKind::StudentLogin, None, api).await;
    harness.rebuild();

    harness.auth_fields("simran", "secret");
    harness.auth_submit();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Incorrect account type for this login page."));
    assert!(harness.services.auth().current_session().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn login_rejection_shows_server_message() {
    let mut harness =
        setup_view_harness(ViewKind::StudentLogin, None, FakeApi::default()).await;
    harness.rebuild();

    harness.auth_fields("simran", "wrong");
    harness.auth_submit();
    harness.settle().await;

    assert!(harness.render().contains("Invalid credentials"));
}

#[tokio::test(flavor = "current_thread")]
async fn student_dashboard_shows_progress() {
    let api = FakeApi::default();
    *api.progress.lock().unwrap() = json!({
        "total_quizzes": 4,
        "completed_quizzes": 3,
        "average_score": 82.5,
        "recent_attempts": [
            {"quiz_name": "Computer Basics", "score": 90.0, "attempt_number": 2}
        ]
    });
    let mut harness =
        setup_view_harness(ViewKind::StudentDashboard, Some(UserRole::Student), api).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("My learning"));
    assert!(html.contains("3 / 4"));
    assert!(html.contains("82.5%"));
    assert!(html.contains("Computer Basics"));
    assert!(html.contains("90%"));
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_dashboard_shows_class_table() {
    let api = FakeApi::default();
    *api.dashboard.lock().unwrap() = vec![
        json!({"student_name": "Aman", "score": 85.0, "badges": ["Quick learner"], "progress": 60.0}),
        json!({"student_name": "Neha", "score": 40.0, "progress": 20.0}),
    ];
    let mut harness =
        setup_view_harness(ViewKind::TeacherDashboard, Some(UserRole::Teacher), api).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Class analytics"));
    assert!(html.contains("class-table"));
    assert!(html.contains("Aman"));
    assert!(html.contains("Quick learner"));
    assert!(html.contains("row-pass"));
    assert!(html.contains("row-fail"));
}

fn api_with_lessons() -> FakeApi {
    let api = FakeApi::default();
    *api.videos.lock().unwrap() = vec![
        json!({"id": 3, "title": "Using a mouse", "category_name": "computer_basics",
               "description": "Click, double-click and drag.",
               "video_url": "https://cdn.example.org/mouse.mp4", "duration_minutes": 4,
               "progress_percentage": 30.0}),
        json!({"id": 4, "title": "Sending email", "category_name": "communication"}),
    ];
    api
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_page_lists_videos() {
    let mut harness =
        setup_view_harness(ViewKind::Lessons, Some(UserRole::Student), api_with_lessons()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Video lessons"));
    assert!(html.contains("Using a mouse"));
    assert!(html.contains("4 min · 30% watched"));
    assert!(html.contains("/student/lessons/3"));
    assert!(html.contains("/student/lessons/4"));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_player_reports_progress_every_ten_seconds() {
    let mut harness =
        setup_view_harness(ViewKind::Lesson(3), Some(UserRole::Student), api_with_lessons()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("<video"));
    assert!(html.contains("https://cdn.example.org/mouse.mp4"));
    assert!(html.contains("Click, double-click and drag."));

    for position in [3.0, 10.1, 10.6, 14.0, 20.0] {
        harness.play_to(position, 240.0);
        harness.settle().await;
    }
    harness.seek();
    harness.play_to(20.4, 240.0);
    harness.settle().await;

    let reports = harness.api.video_reports.lock().unwrap().clone();
    let watched: Vec<u64> = reports.iter().map(|(_, body)| body.watch_time_seconds).collect();
    assert_eq!(watched, [10, 20, 20]);
    assert!(reports.iter().all(|(video, _)| *video == VideoId::new(3)));
    assert!(reports.iter().all(|(_, body)| body.language == Language::En));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_without_source_shows_unavailable_notice() {
    let mut harness =
        setup_view_harness(ViewKind::Lesson(4), Some(UserRole::Student), api_with_lessons()).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Sending email"));
    assert!(html.contains("This video is not available in your language yet."));
    assert!(!html.contains("<video"));
}

#[tokio::test(flavor = "current_thread")]
async fn missing_lesson_flashes_notice() {
    let mut harness =
        setup_view_harness(ViewKind::Lesson(99), Some(UserRole::Student), api_with_lessons())
            .await;
    harness.rebuild();
    harness.settle().await;

    assert_eq!(
        harness.pending_notice().as_deref(),
        Some("That lesson could not be found.")
    );
}
