use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use application::transfer::{DeleteBookDto, GetBookDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::request::{CreateBookRequest, GetAllBookRequest, UpdateBookRequest};
use crate::route::book::response::BookResponse;

pub mod request;
pub mod response;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<GetAllBookRequest>| async move {
                    module
                        .pgpool()
                        .get_all_books(req.into())
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|books| {
                            Json(books.into_iter().map(BookResponse::from).collect::<Vec<_>>())
                        })
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookRequest>| async move {
                    module
                        .pgpool()
                        .create_book(req.into())
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|book| (StatusCode::CREATED, Json(BookResponse::from(book))))
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .get_book(GetBookDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|book| {
                            book.map(|book| BookResponse::from(book).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateBookRequest>| async move {
                    module
                        .pgpool()
                        .update_book(req.into_dto(id))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|book| {
                            book.map(|book| BookResponse::from(book).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .delete_book(DeleteBookDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|()| StatusCode::NO_CONTENT)
                },
            ),
        )
    }
}
