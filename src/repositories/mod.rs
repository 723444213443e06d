//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 서비스 계층은 구현체가 아니라
//! `PropertyRepository` trait에 의존하므로, 테스트에서는 메모리 구현으로 대체할 수 있습니다.

pub mod properties;
