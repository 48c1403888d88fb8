use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::books::domain::model::BookEntity;
use crate::core::domain::Configuration;
use crate::users::domain::model::UserEntity;

// In-process stand-in for the catalog and user services, started on a random port
// by the tests of the http repositories and of everything built on top of them.
#[derive(Debug, Default)]
struct BackendData {
    books: Vec<BookEntity>,
    users: Vec<UserEntity>,
    next_book_id: i64,
    next_user_id: i64,
    last_authorization: Option<String>,
    last_user_payload: Option<Value>,
    stock_calls: Vec<(i64, String)>,
}

type SharedData = Arc<Mutex<BackendData>>;

pub(crate) struct FakeBackend {
    pub url: String,
    data: SharedData,
}

impl FakeBackend {
    pub(crate) async fn start() -> FakeBackend {
        let data = SharedData::default();
        let app = Router::new()
            .route("/livros", get(list_books).post(create_book))
            .route("/livros/buscar", post(search_books))
            .route("/livros/importar/:isbn", post(import_book))
            .route("/livros/:id", put(update_book).delete(delete_book))
            .route("/livros/:id/estoque/:op", put(adjust_stock))
            .route("/auth/login", post(login))
            .route("/usuarios", get(list_users).post(create_user))
            .route("/usuarios/me", get(me))
            .route("/usuarios/:id", put(update_user).delete(delete_user))
            .with_state(data.clone());

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind fake backend");
        let addr = listener.local_addr().expect("should have local address");
        let server = axum::Server::from_tcp(listener).expect("should build fake backend")
            .serve(app.into_make_service());
        tokio::spawn(async move {
            let _ = server.await;
        });
        FakeBackend { url: format!("http://{}", addr), data }
    }

    // configuration pointing both services at this backend, with a fresh data directory
    pub(crate) fn config(&self) -> Configuration {
        let dir = std::env::temp_dir().join(format!("biblio-{}", uuid::Uuid::new_v4()));
        Configuration::new(dir.to_str().unwrap())
            .with_urls(Some(self.url.to_string()), Some(self.url.to_string()))
    }

    pub(crate) fn last_authorization(&self) -> Option<String> {
        self.data.lock().unwrap().last_authorization.clone()
    }

    pub(crate) fn last_user_payload(&self) -> Option<Value> {
        self.data.lock().unwrap().last_user_payload.clone()
    }

    pub(crate) fn stock_calls(&self) -> Vec<(i64, String)> {
        self.data.lock().unwrap().stock_calls.clone()
    }

    pub(crate) fn books(&self) -> Vec<BookEntity> {
        self.data.lock().unwrap().books.clone()
    }

    // seeds a title directly, bypassing the http api
    pub(crate) fn add_book(&self, title: &str, total_quantity: i64) -> BookEntity {
        let mut data = self.data.lock().unwrap();
        data.next_book_id += 1;
        let mut book = BookEntity::new(title, "Autor", format!("isbn-{}", data.next_book_id).as_str(), total_quantity);
        book.id = data.next_book_id;
        data.books.push(book.clone());
        book
    }

    // overrides the stock count the catalog service reports for a title
    pub(crate) fn set_available(&self, book_id: i64, available: i64) {
        let mut data = self.data.lock().unwrap();
        if let Some(book) = data.books.iter_mut().find(|b| b.id == book_id) {
            book.available_quantity = Some(available);
        }
    }

    pub(crate) fn remove_book(&self, book_id: i64) {
        self.data.lock().unwrap().books.retain(|b| b.id != book_id);
    }

    pub(crate) fn add_user(&self, name: &str, cpf: &str) -> UserEntity {
        let mut data = self.data.lock().unwrap();
        data.next_user_id += 1;
        let mut user = UserEntity::new(name, cpf);
        user.id = data.next_user_id;
        data.users.push(user.clone());
        user
    }
}

fn record(data: &SharedData, headers: &HeaderMap) {
    data.lock().unwrap().last_authorization = headers.get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn list_books(State(data): State<SharedData>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    Json(data.lock().unwrap().books.clone()).into_response()
}

async fn create_book(State(data): State<SharedData>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&data, &headers);
    let mut book: BookEntity = match serde_json::from_value(body) {
        Ok(book) => book,
        Err(_) => return error(StatusCode::BAD_REQUEST, "titulo is required"),
    };
    if book.title.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "titulo is required");
    }
    let mut data = data.lock().unwrap();
    if !book.isbn.is_empty() && data.books.iter().any(|b| b.isbn == book.isbn) {
        return error(StatusCode::CONFLICT, "isbn already registered");
    }
    data.next_book_id += 1;
    book.id = data.next_book_id;
    book.available_quantity = Some(book.available_quantity.unwrap_or(book.total_quantity));
    data.books.push(book.clone());
    (StatusCode::CREATED, Json(book)).into_response()
}

async fn search_books(State(data): State<SharedData>, headers: HeaderMap, term: String) -> Response {
    record(&data, &headers);
    let lower = term.trim().to_lowercase();
    let found: Vec<BookEntity> = data.lock().unwrap().books.iter()
        .filter(|b| b.title.to_lowercase().contains(&lower))
        .cloned()
        .collect();
    Json(found).into_response()
}

async fn update_book(State(data): State<SharedData>, Path(id): Path<i64>, headers: HeaderMap,
                     Json(body): Json<Value>) -> Response {
    record(&data, &headers);
    let changes: BookEntity = match serde_json::from_value(body) {
        Ok(book) => book,
        Err(_) => return error(StatusCode::BAD_REQUEST, "titulo is required"),
    };
    let mut data = data.lock().unwrap();
    match data.books.iter_mut().find(|b| b.id == id) {
        Some(book) => {
            book.title = changes.title;
            book.author = changes.author;
            book.isbn = changes.isbn;
            book.published_year = changes.published_year;
            book.total_quantity = changes.total_quantity;
            if changes.available_quantity.is_some() {
                book.available_quantity = changes.available_quantity;
            }
            Json(book.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "book not found"),
    }
}

async fn delete_book(State(data): State<SharedData>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    let mut data = data.lock().unwrap();
    let before = data.books.len();
    data.books.retain(|b| b.id != id);
    if data.books.len() == before {
        return error(StatusCode::NOT_FOUND, "book not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn import_book(State(data): State<SharedData>, Path(isbn): Path<String>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    if isbn == "0000" {
        return error(StatusCode::NOT_FOUND, "isbn not found");
    }
    let mut data = data.lock().unwrap();
    data.next_book_id += 1;
    let mut book = BookEntity::new(format!("Imported {}", isbn).as_str(), "Unknown", isbn.as_str(), 1);
    book.id = data.next_book_id;
    data.books.push(book.clone());
    (StatusCode::CREATED, Json(book)).into_response()
}

async fn adjust_stock(State(data): State<SharedData>, Path((id, op)): Path<(i64, String)>,
                      headers: HeaderMap) -> Response {
    record(&data, &headers);
    let mut data = data.lock().unwrap();
    data.stock_calls.push((id, op.to_string()));
    let book = match data.books.iter_mut().find(|b| b.id == id) {
        Some(book) => book,
        None => return error(StatusCode::NOT_FOUND, "book not found"),
    };
    let available = book.available_quantity.unwrap_or(book.total_quantity);
    match op.as_str() {
        "incrementar" => book.available_quantity = Some(available + 1),
        "decrementar" if available > 0 => book.available_quantity = Some(available - 1),
        "decrementar" => return error(StatusCode::BAD_REQUEST, "no copies available"),
        _ => return error(StatusCode::BAD_REQUEST, "unknown stock operation"),
    }
    Json(book.clone()).into_response()
}

async fn login(State(data): State<SharedData>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&data, &headers);
    let matricula = body["matricula"].as_str().unwrap_or_default();
    match body["senha"].as_str().unwrap_or_default() {
        "secret" => Json(json!({ "token": format!("tok-{}", matricula) })).into_response(),
        "bare" => Json(json!("bare-token")).into_response(),
        _ => error(StatusCode::UNAUTHORIZED, "invalid credentials"),
    }
}

async fn list_users(State(data): State<SharedData>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    Json(data.lock().unwrap().users.clone()).into_response()
}

async fn create_user(State(data): State<SharedData>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&data, &headers);
    let mut user: UserEntity = match serde_json::from_value(body.clone()) {
        Ok(user) => user,
        Err(_) => return error(StatusCode::BAD_REQUEST, "nome is required"),
    };
    let mut data = data.lock().unwrap();
    data.last_user_payload = Some(body);
    if data.users.iter().any(|u| u.matricula == user.matricula) {
        return error(StatusCode::CONFLICT, "matricula already registered");
    }
    data.next_user_id += 1;
    user.id = data.next_user_id;
    data.users.push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn me(State(data): State<SharedData>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    let token = match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) => value.trim_start_matches("Bearer ").to_string(),
        None => return error(StatusCode::UNAUTHORIZED, "missing token"),
    };
    let matricula = token.trim_start_matches("tok-");
    let data = data.lock().unwrap();
    match data.users.iter().find(|u| u.matricula == matricula) {
        Some(user) => Json(user.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "user not found"),
    }
}

async fn update_user(State(data): State<SharedData>, Path(id): Path<i64>, headers: HeaderMap,
                     Json(body): Json<Value>) -> Response {
    record(&data, &headers);
    let changes: UserEntity = match serde_json::from_value(body.clone()) {
        Ok(user) => user,
        Err(_) => return error(StatusCode::BAD_REQUEST, "nome is required"),
    };
    let mut data = data.lock().unwrap();
    data.last_user_payload = Some(body);
    match data.users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            *user = UserEntity { id, ..changes };
            Json(user.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "user not found"),
    }
}

async fn delete_user(State(data): State<SharedData>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    record(&data, &headers);
    let mut data = data.lock().unwrap();
    let before = data.users.len();
    data.users.retain(|u| u.id != id);
    if data.users.len() == before {
        return error(StatusCode::NOT_FOUND, "user not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
