//! Web Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test web_tests

use integration_tests::{
    assert_json, assert_redirect, assert_status, check_test_env, find_post, fixtures::*,
    signed_in_user, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server.get(&browser, "/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_redirects_to_login_without_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server
        .post_form(&browser, "/register", &RegisterForm::unique())
        .await
        .expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    // Registration does not log the user in
    let response = server.get(&browser, "/create-post").await.expect("Request failed");
    assert_redirect(&response, "/login").unwrap();
}

#[tokio::test]
async fn test_register_validation_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let mut form = RegisterForm::unique();
    form.username = String::new();
    let response = server
        .post_form(&browser, "/register", &form)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("all fields required"));

    let mut form = RegisterForm::unique();
    form.email = "not-an-email".to_string();
    let response = server
        .post_form(&browser, "/register", &form)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("invalid email format"));

    let mut form = RegisterForm::unique();
    form.password = "short".to_string();
    let response = server
        .post_form(&browser, "/register", &form)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("password too short"));
}

#[tokio::test]
async fn test_register_duplicate_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let account = RegisterForm::unique();
    let response = server
        .post_form(&browser, "/register", &account)
        .await
        .expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    // Same username, different email
    let mut taken = RegisterForm::unique();
    taken.username = account.username.clone();
    let response = server
        .post_form(&browser, "/register", &taken)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("credential already in use"));

    // Same email, different username
    let mut taken = RegisterForm::unique();
    taken.email = account.email.clone();
    let response = server
        .post_form(&browser, "/register", &taken)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("credential already in use"));
}

// ============================================================================
// Login and Logout Tests
// ============================================================================

#[tokio::test]
async fn test_login_with_username_or_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let account = RegisterForm::unique();
    let response = server
        .post_form(&browser, "/register", &account)
        .await
        .expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    let response = server
        .post_form(&browser, "/login", &LoginForm::with_username(&account))
        .await
        .expect("Request failed");
    assert_redirect(&response, "/").unwrap();

    // A separate browser signs in with the email instead
    let other = server.browser().expect("Failed to build client");
    let response = server
        .post_form(&other, "/login", &LoginForm::with_email(&account))
        .await
        .expect("Request failed");
    assert_redirect(&response, "/").unwrap();
}

#[tokio::test]
async fn test_login_failures() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    // Unknown credential
    let unknown = LoginForm {
        credential: format!("ghost{}", unique_suffix()),
        password: "TestPass123!".to_string(),
    };
    let response = server
        .post_form(&browser, "/login", &unknown)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("invalid credentials"));

    // Wrong password for a real account
    let account = RegisterForm::unique();
    server
        .post_form(&browser, "/register", &account)
        .await
        .expect("Request failed");
    let wrong = LoginForm {
        credential: account.username.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server
        .post_form(&browser, "/login", &wrong)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("invalid credentials"));

    // Blank submission
    let blank = LoginForm {
        credential: String::new(),
        password: String::new(),
    };
    let response = server
        .post_form(&browser, "/login", &blank)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("credential and password required"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    // The composer is reachable while signed in
    let response = server.get(&browser, "/create-post").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&browser, "/logout").await.expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    // The session is gone
    let response = server.get(&browser, "/create-post").await.expect("Request failed");
    assert_redirect(&response, "/login").unwrap();
}

// ============================================================================
// Post Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_appears_on_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, account) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    let response = server
        .post_form(&browser, "/create-post", &post)
        .await
        .expect("Request failed");
    assert_redirect(&response, "/").unwrap();

    let id = find_post(&server, &browser, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    let response = server
        .get(&browser, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(&post.content));
    assert!(html.contains(&account.username));
}

#[tokio::test]
async fn test_create_post_requires_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server.get(&browser, "/create-post").await.expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    let response = server
        .post_form(&browser, "/create-post", &PostForm::new("drive-by"))
        .await
        .expect("Request failed");
    assert_redirect(&response, "/login").unwrap();
}

#[tokio::test]
async fn test_create_post_requires_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let response = server
        .post_form(&browser, "/create-post", &PostForm::new("   "))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("content required"));
}

// ============================================================================
// Post Edit Tests
// ============================================================================

#[tokio::test]
async fn test_edit_own_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    server
        .post_form(&browser, "/create-post", &post)
        .await
        .expect("Request failed");
    let id = find_post(&server, &browser, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    // The form comes pre-filled with the current content
    let response = server
        .get(&browser, &format!("/edit-post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(&post.content));

    let updated = PostForm::unique();
    let response = server
        .post_form(&browser, &format!("/edit-post/{id}"), &updated)
        .await
        .expect("Request failed");
    assert_redirect(&response, "/").unwrap();

    let response = server
        .get(&browser, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    let html = response.text().await.unwrap();
    assert!(html.contains(&updated.content));
    assert!(!html.contains(&post.content));
}

#[tokio::test]
async fn test_edit_requires_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    server
        .post_form(&browser, "/create-post", &post)
        .await
        .expect("Request failed");
    let id = find_post(&server, &browser, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    let response = server
        .post_form(&browser, &format!("/edit-post/{id}"), &PostForm::new(""))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("content required"));

    // The existing content survives
    let response = server
        .get(&browser, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    let html = response.text().await.unwrap();
    assert!(html.contains(&post.content));
}

#[tokio::test]
async fn test_non_author_cannot_edit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    server
        .post_form(&author, "/create-post", &post)
        .await
        .expect("Request failed");
    let id = find_post(&server, &author, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    let (intruder, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let response = server
        .get(&intruder, &format!("/edit-post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = server
        .post_form(&intruder, &format!("/edit-post/{id}"), &PostForm::new("hijacked"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.text().await.unwrap();
    assert!(body.contains("not the post author"));

    // Content is untouched
    let response = server
        .get(&intruder, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    let html = response.text().await.unwrap();
    assert!(html.contains(&post.content));
    assert!(!html.contains("hijacked"));
}

#[tokio::test]
async fn test_edit_requires_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server.get(&browser, "/edit-post/1").await.expect("Request failed");
    assert_redirect(&response, "/login").unwrap();

    let response = server
        .post_form(&browser, "/edit-post/1", &PostForm::new("anonymous edit"))
        .await
        .expect("Request failed");
    assert_redirect(&response, "/login").unwrap();
}

// ============================================================================
// Post Page Tests
// ============================================================================

#[tokio::test]
async fn test_post_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    // No generated id is ever this small
    let response = server.get(&browser, "/post/1").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("post not found"));

    // Ids that do not parse get the same page
    let response = server.get(&browser, "/post/abc").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("post not found"));
}

// ============================================================================
// Post Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_own_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    server
        .post_form(&browser, "/create-post", &post)
        .await
        .expect("Request failed");
    let id = find_post(&server, &browser, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    let response = server
        .delete(&browser, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    let payload: DeleteMessage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(payload.message, "Post deleted successfully");

    let response = server
        .get(&browser, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server.delete(&browser, "/post/1").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.unwrap();
    assert_eq!(body, "login required");
}

#[tokio::test]
async fn test_non_author_cannot_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let post = PostForm::unique();
    server
        .post_form(&author, "/create-post", &post)
        .await
        .expect("Request failed");
    let id = find_post(&server, &author, &post.content)
        .await
        .expect("Request failed")
        .expect("Post not found on feed");

    let (intruder, _) = signed_in_user(&server).await.expect("Sign-in failed");
    let response = server
        .delete(&intruder, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.text().await.unwrap();
    assert_eq!(body, "not the post author");

    // The post survives
    let response = server
        .get(&author, &format!("/post/{id}"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_unknown_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    let response = server.delete(&browser, "/post/1").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert_eq!(body, "post not found");

    let response = server.delete(&browser, "/post/abc").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert_eq!(body, "post not found");
}

// ============================================================================
// Feed Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_feed_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (browser, _) = signed_in_user(&server).await.expect("Sign-in failed");

    // Enough posts to guarantee a second page
    for _ in 0..11 {
        let response = server
            .post_form(&browser, "/create-post", &PostForm::unique())
            .await
            .expect("Request failed");
        assert_redirect(&response, "/").unwrap();
    }

    let response = server.get(&browser, "/").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert_eq!(html.matches("<li class=\"post\">").count(), 10);
    assert!(html.contains("/?page=2"));
    assert!(!html.contains("Previous"));

    let response = server.get(&browser, "/?page=2").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("/?page=1"));
}

#[tokio::test]
async fn test_feed_page_past_the_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    let response = server.get(&browser, "/?page=999999").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert_eq!(html.matches("<li class=\"post\"").count(), 0);
    assert!(html.contains("/?page=999998"));
    assert!(!html.contains("Next"));
}

#[tokio::test]
async fn test_feed_page_parameter_defaults() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().expect("Failed to build client");

    // Garbage and out-of-range values render the first page
    for query in ["/?page=abc", "/?page=0", "/?page=-3", "/?page=1.5", "/"] {
        let response = server.get(&browser, query).await.expect("Request failed");
        assert_eq!(response.status(), StatusCode::OK);
        let html = response.text().await.unwrap();
        assert!(!html.contains("Previous"), "{query} should render page one");
    }
}
