//! 游戏错误处理模块
//!
//! 处理游戏运行过程中可能出现的各种错误：用户输入、积分文件IO、序列化等。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 未知的角色职业
    #[error("Неизвестный класс персонажа: {0}")]
    UnknownClass(String),

    /// 未知的地点
    #[error("Неизвестная локация: {0}")]
    UnknownLocation(String),

    /// 职业没有可用的同伴
    #[error("Invalid character class: {0}")]
    InvalidClass(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 积分文件序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 用户输入错误
    #[error("Input error: {0}")]
    InputError(String),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::UnknownClass(_) | GameError::InvalidClass(_) => {
            "Неизвестный класс персонажа".to_string()
        }
        GameError::UnknownLocation(_) => "Неизвестная локация".to_string(),
        GameError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Файл со счетом не найден".to_string(),
            std::io::ErrorKind::PermissionDenied => "Нет доступа к файлу со счетом".to_string(),
            _ => format!("Ошибка ввода-вывода: {}", e),
        },
        GameError::Serialization(_) => "Файл со счетом поврежден".to_string(),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_details() {
        let err = GameError::UnknownClass("PALADIN".into());
        assert_eq!(handle_error(&err), "Неизвестный класс персонажа");
        assert_eq!(err.to_string(), "Неизвестный класс персонажа: PALADIN");

        let err = GameError::UnknownLocation("болото".into());
        assert_eq!(handle_error(&err), "Неизвестная локация");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: GameError = io.into();
        assert_eq!(handle_error(&err), "Нет доступа к файлу со счетом");
    }

    #[test]
    fn json_errors_convert() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GameError = bad.into();
        assert!(matches!(err, GameError::Serialization(_)));
        assert_eq!(handle_error(&err), "Файл со счетом поврежден");
    }

    #[test]
    fn class_without_companion_reads_as_unknown_class() {
        let err = GameError::InvalidClass("ROGUE".into());
        assert_eq!(handle_error(&err), "Неизвестный класс персонажа");
        assert_eq!(err.to_string(), "Invalid character class: ROGUE");
    }
}
