//! REST 응답 alert 헤더 유틸리티
//!
//! 프론트엔드(UI)가 토스트 메시지를 띄울 수 있도록, 엔티티 변경 결과와
//! 실패 사유를 응답 헤더로 전달합니다. 헤더 이름은 애플리케이션 이름을 포함합니다.
//!
//! | 헤더 | 의미 |
//! |------|------|
//! | `X-{app}-alert` | 성공 메시지 |
//! | `X-{app}-error` | 실패 메시지 |
//! | `X-{app}-params` | 메시지 파라미터 (식별자 또는 엔티티 이름) |

use actix_web::HttpResponseBuilder;

use crate::config::ApplicationConfig;

/// 응답에 덧붙일 alert 헤더 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHeaders {
    headers: Vec<(String, String)>,
}

impl AlertHeaders {
    /// 헤더 이름으로 값을 찾습니다.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 응답 빌더에 모든 헤더를 추가합니다.
    pub fn apply_to(self, builder: &mut HttpResponseBuilder) {
        for (name, value) in self.headers {
            builder.insert_header((name, value));
        }
    }
}

fn header_name(app_name: &str, suffix: &str) -> String {
    format!("X-{}-{}", app_name, suffix)
}

fn alert_for(app_name: &str, message: String, param: &str) -> AlertHeaders {
    AlertHeaders {
        headers: vec![
            (header_name(app_name, "alert"), message),
            (header_name(app_name, "params"), param.to_string()),
        ],
    }
}

/// 임의의 성공 메시지 alert 헤더를 생성합니다.
pub fn create_alert(message: &str, param: &str) -> AlertHeaders {
    alert_for(&ApplicationConfig::name(), message.to_string(), param)
}

/// 엔티티 생성 alert
pub fn create_entity_creation_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(
        &format!("A new {} is created with identifier {}", entity_name, param),
        param,
    )
}

/// 엔티티 수정 alert
pub fn create_entity_update_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(
        &format!("A {} is updated with identifier {}", entity_name, param),
        param,
    )
}

/// 엔티티 삭제 alert
pub fn create_entity_deletion_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(
        &format!("A {} is deleted with identifier {}", entity_name, param),
        param,
    )
}

/// 실패 alert
///
/// `X-{app}-error`에 메시지를, `X-{app}-params`에 엔티티 이름을 담습니다.
/// 에러 키는 헤더로 내보내지 않고 로그에만 남깁니다.
pub fn create_failure_alert(entity_name: &str, error_key: &str, message: &str) -> AlertHeaders {
    log::error!("Entity processing failed [{}.{}]: {}", entity_name, error_key, message);

    let app_name = ApplicationConfig::name();
    AlertHeaders {
        headers: vec![
            (header_name(&app_name, "error"), message.to_string()),
            (header_name(&app_name, "params"), entity_name.to_string()),
        ],
    }
}
