use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default, alias = "user")]
    pub usuario: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_access_token_alias() {
        let json = r#"{"access_token":"abc","user":{"id":"1","nome":"RH"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.usuario.unwrap().nome, "RH");
    }

    #[test]
    fn login_response_without_user() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(resp.token, "t");
        assert!(resp.usuario.is_none());
    }
}
