//! API integration tests

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::{send, test_app};

fn ana() -> Value {
    json!({
        "nome": "Ana",
        "matricula": "M1",
        "email": "a@x.com",
        "telefone": "111"
    })
}

fn dom_casmurro() -> Value {
    json!({
        "titulo": "Dom Casmurro",
        "autor": "Machado de Assis",
        "editora": "Garnier",
        "edicao": 1,
        "ano_publicacao": 1899
    })
}

async fn book_available(app: &axum::Router, book_id: i64) -> bool {
    let (_, books) = send(app, Method::GET, "/livros", None).await;
    books
        .as_array()
        .expect("books array")
        .iter()
        .find(|book| book["id"] == book_id)
        .and_then(|book| book["disponivel"].as_bool())
        .expect("book listed")
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_loan_lifecycle() {
    let app = test_app().await;

    // Scenario A: register, then lend
    let (status, student) = send(&app, Method::POST, "/alunos", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["message"], "Aluno cadastrado com sucesso");
    let student_id = student["id"].as_i64().expect("student id");

    let (status, book) = send(&app, Method::POST, "/livros", Some(dom_casmurro())).await;
    assert_eq!(status, StatusCode::CREATED);
    let book_id = book["id"].as_i64().expect("book id");
    assert!(book_available(&app, book_id).await);

    let loan_request = json!({ "aluno_id": student_id, "livro_id": book_id });
    let (status, loan) = send(&app, Method::POST, "/emprestimos", Some(loan_request.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        loan["message"],
        format!(
            "Empréstimo realizado com sucesso para livro {} - Dom Casmurro e aluno M1 - Ana",
            book_id
        )
    );
    let loan_id = loan["id"].as_i64().expect("loan id");
    assert!(!book_available(&app, book_id).await);

    // Scenario B: the book is out
    let (status, error) = send(&app, Method::POST, "/emprestimos", Some(loan_request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["kind"], "unavailable");

    // Scenario C: same-day return is on time
    let (status, returned) = send(
        &app,
        Method::PUT,
        "/emprestimos",
        Some(json!({ "emprestimo_id": loan_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["message"], "Livro devolvido com sucesso.");
    assert!(book_available(&app, book_id).await);

    // Scenario D: no second return
    let (status, error) = send(
        &app,
        Method::POST,
        &format!("/emprestimos/{}/devolucao", loan_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["kind"], "already_returned");

    // Scenario E: listing shows the closed loan
    let (status, loans) = send(&app, Method::GET, "/emprestimos", None).await;
    assert_eq!(status, StatusCode::OK);
    let loans = loans.as_array().expect("loans array");
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["aluno_id"], student_id);
    assert_eq!(loans[0]["livro_id"], book_id);
    assert!(loans[0]["data_devolucao"].is_string());
    assert_eq!(loans[0]["devolvido_em_atraso"], false);
    assert!(loans[0]["data_limite_devolucao"]
        .as_str()
        .expect("due date")
        .ends_with("T23:59:59Z"));
}

#[tokio::test]
async fn test_duplicate_student() {
    let app = test_app().await;
    send(&app, Method::POST, "/alunos", Some(ana())).await;

    let mut other = ana();
    other["matricula"] = json!("M2");
    other["telefone"] = json!("222");
    let (status, error) = send(&app, Method::POST, "/alunos", Some(other)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["kind"], "duplicate");
    assert_eq!(error["message"], "Email já cadastrado");

    let (_, students) = send(&app, Method::GET, "/alunos", None).await;
    assert_eq!(students.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let app = test_app().await;

    let (status, error) = send(
        &app,
        Method::POST,
        "/alunos",
        Some(json!({ "nome": "Ana", "email": "a@x.com", "telefone": "111" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "validation");

    let mut book = dom_casmurro();
    book["titulo"] = json!("");
    let (status, error) = send(&app, Method::POST, "/livros", Some(book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "validation");

    let (status, error) = send(&app, Method::POST, "/emprestimos", Some(json!({ "aluno_id": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "validation");
}

#[tokio::test]
async fn test_not_found() {
    let app = test_app().await;
    let (_, student) = send(&app, Method::POST, "/alunos", Some(ana())).await;

    let (status, error) = send(
        &app,
        Method::POST,
        "/emprestimos",
        Some(json!({ "aluno_id": student["id"], "livro_id": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["kind"], "not_found");

    let (status, error) = send(&app, Method::PUT, "/emprestimos", Some(json!({ "emprestimo_id": 99 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["kind"], "not_found");

    let (_, loans) = send(&app, Method::GET, "/emprestimos", None).await;
    assert_eq!(loans, json!([]));
}

#[tokio::test]
async fn test_non_numeric_loan_id_is_validation_error() {
    let app = test_app().await;

    let (status, error) = send(&app, Method::POST, "/emprestimos/abc/devolucao", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "validation");
    assert!(error["message"].as_str().unwrap().contains("abc"));

    let (status, error) = send(&app, Method::POST, "/emprestimos/99/devolucao", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["kind"], "not_found");
}

#[tokio::test]
async fn test_english_field_aliases() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/alunos",
        Some(json!({
            "name": "Bruno",
            "enrollment_code": "M9",
            "email": "b@x.com",
            "phone": "999"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, students) = send(&app, Method::GET, "/alunos", None).await;
    assert_eq!(students[0]["nome"], "Bruno");
    assert_eq!(students[0]["matricula"], "M9");
}
