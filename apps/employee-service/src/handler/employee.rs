//! # 従業員ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /employees` - 一覧
//! - `GET /employees/{id}` - 取得
//! - `POST /employees` - 登録（フォーム形式）
//! - `PUT /employees/{id}` - 部分更新（フォーム形式、空の項目は変更しない）
//! - `DELETE /employees/{id}` - 削除
//!
//! ユースケースの呼び出しは [`EmployeeState::request_timeout`] を期限として実行し、
//! 期限を過ぎた場合は処理を中断して 500 を返す。

use std::{sync::Arc, time::Duration};

use axum::{
    Form,
    Json,
    extract::{Path, State, rejection::FormRejection},
};
use chrono::NaiveDate;
use roster_domain::employee::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use roster_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, usecase::EmployeeUseCase};

/// 従業員ハンドラの共有状態
pub struct EmployeeState {
    pub usecase:         Arc<dyn EmployeeUseCase>,
    pub request_timeout: Duration,
}

impl EmployeeState {
    /// 期限付きでユースケースを実行する
    ///
    /// 期限を過ぎると Future はドロップされ、実行中のクエリも中断される。
    async fn within_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, CoreError>>,
    ) -> Result<T, CoreError> {
        tokio::time::timeout(self.request_timeout, operation)
            .await
            .map_err(|_| CoreError::Timeout)?
    }
}

// --- リクエスト/レスポンス型 ---

/// 登録・更新フォーム
///
/// 送られなかった項目は空文字列として扱う。
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name:  String,
    #[serde(default)]
    pub email:      String,
    #[serde(default)]
    pub hire_date:  String,
}

/// 従業員レスポンス
#[derive(Debug, Serialize)]
pub struct EmployeeDto {
    pub id:         EmployeeId,
    pub first_name: String,
    pub last_name:  String,
    pub email:      String,
    pub hire_date:  NaiveDate,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id:         employee.id(),
            first_name: employee.first_name().to_string(),
            last_name:  employee.last_name().to_string(),
            email:      employee.email().to_string(),
            hire_date:  employee.hire_date(),
        }
    }
}

fn parse_id(raw: &str) -> Result<EmployeeId, CoreError> {
    raw.parse()
        .map_err(|e| CoreError::BadRequest(format!("invalid employee id {raw:?}: {e}")))
}

fn parse_form(form: Result<Form<EmployeeForm>, FormRejection>) -> Result<EmployeeForm, CoreError> {
    form.map(|Form(form)| form)
        .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))
}

// --- ハンドラ ---

/// GET /employees
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<Json<ApiResponse<Vec<EmployeeDto>>>, CoreError> {
    let employees = state
        .within_deadline(state.usecase.list_employees())
        .await?;

    Ok(Json(ApiResponse::success(
        employees.iter().map(EmployeeDto::from).collect(),
    )))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EmployeeDto>>, CoreError> {
    let id = parse_id(&id)?;
    let employee = state
        .within_deadline(state.usecase.get_employee(id))
        .await?;

    Ok(Json(ApiResponse::success(EmployeeDto::from(&employee))))
}

/// POST /employees
///
/// 必須項目と形式を検証してから登録する。
pub async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    let form = parse_form(form)?;
    let employee = NewEmployee::try_new(
        form.first_name,
        form.last_name,
        form.email,
        &form.hire_date,
    )?;

    state
        .within_deadline(state.usecase.register_employee(employee))
        .await?;

    Ok(Json(ApiResponse::ok()))
}

/// PUT /employees/{id}
///
/// 空でない項目だけを既存の従業員に反映する。
pub async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    let id = parse_id(&id)?;
    let form = parse_form(form)?;
    let patch = EmployeePatch::try_new(
        form.first_name,
        form.last_name,
        form.email,
        &form.hire_date,
    )?;

    state
        .within_deadline(state.usecase.update_employee(id, patch))
        .await?;

    Ok(Json(ApiResponse::ok()))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    let id = parse_id(&id)?;
    state
        .within_deadline(state.usecase.delete_employee(id))
        .await?;

    Ok(Json(ApiResponse::ok()))
}
