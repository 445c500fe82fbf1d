//! Tools, resources, and prompts over a real notes file.

mod common;

use serde_json::json;

use user_notes_mcp::prompts::PromptRegistry;
use user_notes_mcp::resources::ResourceRegistry;
use user_notes_mcp::tools::ToolRegistry;
use user_notes_mcp::types::*;

use common::fixtures::{create_test_session, create_unreachable_session};

// ============================================================
// Tools
// ============================================================

#[tokio::test]
async fn test_add_then_read_notes() {
    let fixture = create_test_session();
    let mut client = fixture.client();
    client.initialize().await;

    let confirmation = client
        .call_tool_text("addNote", Some(json!({ "message": "Buy milk" })))
        .await;
    assert_eq!(confirmation, "Note has been saved successfully!");
    client
        .call_tool_text("addNote", Some(json!({ "message": "Call Sam" })))
        .await;

    let notes = client.call_tool_text("readNotes", None).await;
    assert_eq!(notes, "Buy milk\nCall Sam");

    let on_disk = std::fs::read_to_string(&fixture.path).unwrap();
    assert_eq!(on_disk, "Buy milk\nCall Sam\n");
    assert_eq!(fixture.session.lock().await.notes_added(), 2);
}

#[tokio::test]
async fn test_read_notes_on_empty_store() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let notes = client.call_tool_text("readNotes", None).await;
    assert_eq!(notes, "No note found!");
}

#[tokio::test]
async fn test_add_note_missing_message() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.call_tool("addNote", Some(json!({}))).await;
    assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
    assert_eq!(std::fs::read_to_string(&fixture.path).unwrap(), "");
}

#[tokio::test]
async fn test_add_note_wrong_type() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client
        .call_tool("addNote", Some(json!({ "message": 42 })))
        .await;
    assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_tool() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.call_tool("deleteNote", None).await;
    assert_eq!(response["error"]["code"], mcp_error_codes::TOOL_NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_is_tool_error() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    std::fs::remove_file(&fixture.path).unwrap();
    std::fs::create_dir(&fixture.path).unwrap();

    let response = client
        .call_tool("addNote", Some(json!({ "message": "nowhere to go" })))
        .await;
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    assert!(response["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Notes error"));
}

#[tokio::test]
async fn test_missing_directory_fails_only_the_call() {
    let fixture = create_unreachable_session();
    let mut client = fixture.client();

    let init = client.initialize().await;
    assert!(init.get("result").is_some());

    let response = client
        .call_tool("addNote", Some(json!({ "message": "lost" })))
        .await;
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);

    let response = client.request("ping", None).await;
    assert!(response["result"].is_object());
    assert!(!fixture.path.exists());
}

#[tokio::test]
async fn test_registry_call_directly() {
    let fixture = create_test_session();

    let result = ToolRegistry::call(
        "addNote",
        Some(json!({ "message": "direct" })),
        &fixture.session,
    )
    .await
    .unwrap();
    assert_eq!(result.is_error, None);

    let result = ToolRegistry::call("readNotes", None, &fixture.session)
        .await
        .unwrap();
    assert_eq!(
        result.content,
        vec![ToolContent::Text {
            text: "direct".to_string()
        }]
    );
}

// ============================================================
// Resources
// ============================================================

#[tokio::test]
async fn test_latest_note_keeps_newline() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    client
        .call_tool("addNote", Some(json!({ "message": "Buy milk" })))
        .await;
    client
        .call_tool("addNote", Some(json!({ "message": "Call Sam" })))
        .await;

    let latest = client.read_resource_text("mynotes://local/latest").await;
    assert_eq!(latest, "Call Sam\n");
}

#[tokio::test]
async fn test_latest_note_on_empty_store() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.read_resource("mynotes://local/latest").await;
    let content = &response["result"]["contents"][0];
    assert_eq!(content["uri"], "mynotes://local/latest");
    assert_eq!(content["text"], "No notes found");
}

#[tokio::test]
async fn test_greeting_resource() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.read_resource("greeting://Ada").await;
    let content = &response["result"]["contents"][0];
    assert_eq!(content["uri"], "greeting://Ada");
    assert_eq!(content["text"], "Hello, Ada!");
}

#[tokio::test]
async fn test_greeting_resource_without_name() {
    let fixture = create_test_session();
    let result = ResourceRegistry::read("greeting://", &fixture.session).await;
    assert!(matches!(result, Err(McpError::ResourceNotFound(_))));
}

#[tokio::test]
async fn test_unknown_resource() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.read_resource("mynotes://local/first").await;
    assert_eq!(response["error"]["code"], mcp_error_codes::RESOURCE_NOT_FOUND);
}

#[tokio::test]
async fn test_resource_read_missing_uri() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client.request("resources/read", Some(json!({}))).await;
    assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
}

// ============================================================
// Prompts
// ============================================================

#[tokio::test]
async fn test_note_summary_prompt() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    client
        .call_tool("addNote", Some(json!({ "message": "  Ship v1  " })))
        .await;

    let text = client.get_prompt_text("noteSummary", None).await;
    assert_eq!(
        text,
        "Summarize the major points on these notes, and don't leave anything important out. Notes: Ship v1"
    );

    let response = client.get_prompt("noteSummary", None).await;
    assert_eq!(response["result"]["messages"][0]["role"], "user");
    assert_eq!(response["result"]["messages"][0]["content"]["type"], "text");
}

#[tokio::test]
async fn test_note_summary_on_empty_store() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let text = client.get_prompt_text("noteSummary", None).await;
    assert_eq!(text, "No note found!");
}

#[tokio::test]
async fn test_greet_user_styles() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let cases = [
        (Some("friendly"), "Please write a warm, friendly greeting"),
        (Some("formal"), "Please write a formal, professional greeting"),
        (Some("casual"), "Please write a casual, relaxed greeting"),
        (Some("grumpy"), "Please write a warm, friendly greeting"),
        (None, "Please write a warm, friendly greeting"),
    ];

    for (style, instruction) in cases {
        let args = match style {
            Some(s) => json!({ "name": "Sam", "style": s }),
            None => json!({ "name": "Sam" }),
        };
        let text = client.get_prompt_text("greet_user", Some(args)).await;
        assert_eq!(text, format!("{instruction} for someone named Sam."));
    }
}

#[tokio::test]
async fn test_greet_user_requires_name() {
    let fixture = create_test_session();
    let mut client = fixture.client();

    let response = client
        .get_prompt("greet_user", Some(json!({ "style": "formal" })))
        .await;
    assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_prompt() {
    let fixture = create_test_session();
    let result = PromptRegistry::get("haiku", None, &fixture.session).await;
    assert!(matches!(result, Err(McpError::PromptNotFound(_))));
}

// ============================================================
// Concurrency
// ============================================================

#[tokio::test]
async fn test_concurrent_adds_are_whole_lines() {
    let fixture = create_test_session();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let session = fixture.session.clone();
        tasks.push(tokio::spawn(async move {
            ToolRegistry::call(
                "addNote",
                Some(json!({ "message": format!("note number {i}") })),
                &session,
            )
            .await
            .unwrap()
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let content = std::fs::read_to_string(&fixture.path).unwrap();
    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort_unstable();
    let mut expected: Vec<String> = (0..32).map(|i| format!("note number {i}")).collect();
    expected.sort_unstable();
    assert_eq!(lines, expected);
    assert_eq!(fixture.session.lock().await.notes_added(), 32);
}
