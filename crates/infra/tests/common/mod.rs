//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

#![allow(dead_code)]

use chrono::NaiveDate;
use roster_domain::employee::NewEmployee;

/// 登録候補の従業員を作成する
pub fn new_employee(first_name: &str, last_name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name:  last_name.to_string(),
        email:      email.to_string(),
        hire_date:  hire_date(),
    }
}

/// よく使う登録候補（John Doe）
pub fn john_doe() -> NewEmployee {
    new_employee("John", "Doe", "johndoe@example.com")
}

pub fn hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 12, 12).unwrap()
}
