//! # 従業員
//!
//! 従業員レコードと、その登録・部分更新時の入力検証を定義する。
//!
//! ## 型の役割
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`EmployeeId`] | DB が採番する識別子 |
//! | [`Employee`] | 永続化済みの従業員（識別子あり） |
//! | [`NewEmployee`] | 登録候補（識別子なし、検証済み） |
//! | [`EmployeePatch`] | 部分更新の差分（指定された項目のみ `Some`） |
//!
//! ## 検証順序
//!
//! 登録時の検証は以下の順で行い、最初に失敗した項目だけを報告する。
//! レスポンスのメッセージが入力に対して一意に決まるよう、この順序は固定。
//!
//! 1. `first_name` 必須
//! 2. `last_name` 必須
//! 3. `email` 必須
//! 4. `hire_date` 必須
//! 5. `email` 形式

use std::{num::ParseIntError, str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 入社日の入力形式
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("メールアドレスの正規表現が不正です")
});

/// 年 4 桁・月 2 桁・日 2 桁のゼロ埋め形式
static HIRE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("入社日の正規表現が不正です")
});

/// メールアドレスが `local@domain.tld` 形式かどうかを判定する
///
/// TLD は英字 2 文字以上。
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 入社日文字列（`YYYY-MM-DD`）をパースする
///
/// 桁数の足りない年月日、前後の空白、符号付きの年は受け付けない。
///
/// # エラー
///
/// 形式が異なる場合、またはパースに失敗した場合に `DomainError::Validation` を返す。
pub fn parse_hire_date(raw: &str) -> Result<NaiveDate, DomainError> {
    if !HIRE_DATE_PATTERN.is_match(raw) {
        return Err(invalid_date(format!("{raw:?} does not match YYYY-MM-DD")));
    }
    NaiveDate::parse_from_str(raw, HIRE_DATE_FORMAT).map_err(invalid_date)
}

fn invalid_date(reason: impl std::fmt::Display) -> DomainError {
    DomainError::Validation(format!("invalid parsing date, err:{reason}"))
}

// =========================================================================
// EmployeeId
// =========================================================================

/// 従業員 ID
///
/// DB の `BIGSERIAL` で採番される。作成後は変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

// =========================================================================
// Employee
// =========================================================================

/// 永続化済みの従業員
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id:         EmployeeId,
    first_name: String,
    last_name:  String,
    email:      String,
    hire_date:  NaiveDate,
}

impl Employee {
    /// 採番済み ID と登録候補から従業員を組み立てる
    pub fn new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            hire_date: new.hire_date,
        }
    }

    /// DB の行から復元する
    pub fn from_db(
        id: EmployeeId,
        first_name: String,
        last_name: String,
        email: String,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            hire_date,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
}

// =========================================================================
// NewEmployee
// =========================================================================

/// 登録候補の従業員（検証済み、ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name:  String,
    pub email:      String,
    pub hire_date:  NaiveDate,
}

impl NewEmployee {
    /// 入力値を検証し、登録候補を作成する
    ///
    /// 必須項目と形式を [`validate_registration`] で検証した後、
    /// 入社日をパースする。
    pub fn try_new(
        first_name: String,
        last_name: String,
        email: String,
        hire_date: &str,
    ) -> Result<Self, DomainError> {
        validate_registration(&first_name, &last_name, &email, hire_date)?;
        let hire_date = parse_hire_date(hire_date)?;

        Ok(Self {
            first_name,
            last_name,
            email,
            hire_date,
        })
    }
}

/// 登録入力を固定順序で検証する
///
/// 最初に違反した項目のエラーのみを返す。
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    hire_date: &str,
) -> Result<(), DomainError> {
    let required = [
        ("first_name", first_name),
        ("last_name", last_name),
        ("email", email),
        ("hire_date", hire_date),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(DomainError::missing_field(field));
    }

    if !is_valid_email(email) {
        return Err(DomainError::Validation(
            "please input valid email".to_string(),
        ));
    }

    Ok(())
}

// =========================================================================
// EmployeePatch
// =========================================================================

/// 部分更新の差分
///
/// 空文字列で送られた項目は「指定なし」として `None` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name:  Option<String>,
    pub email:      Option<String>,
    pub hire_date:  Option<NaiveDate>,
}

impl EmployeePatch {
    /// フォーム入力から差分を作成する
    ///
    /// 入社日のパース、メールアドレスの形式の順に検証する。
    pub fn try_new(
        first_name: String,
        last_name: String,
        email: String,
        hire_date: &str,
    ) -> Result<Self, DomainError> {
        let hire_date = if hire_date.is_empty() {
            None
        } else {
            Some(parse_hire_date(hire_date)?)
        };

        if !email.is_empty() && !is_valid_email(&email) {
            return Err(DomainError::Validation(
                "please input valid email".to_string(),
            ));
        }

        Ok(Self {
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            email: non_empty(email),
            hire_date,
        })
    }

    /// 既存の従業員に差分を重ねる
    ///
    /// 指定された項目はそれぞれ独立に上書きする。ID は変更しない。
    pub fn apply_to(self, employee: Employee) -> Employee {
        Employee {
            id:         employee.id,
            first_name: self.first_name.unwrap_or(employee.first_name),
            last_name:  self.last_name.unwrap_or(employee.last_name),
            email:      self.email.unwrap_or(employee.email),
            hire_date:  self.hire_date.unwrap_or(employee.hire_date),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
