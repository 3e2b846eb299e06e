use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "ferias_auth_token";
const USER_KEY: &str = "ferias_auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save token and user to localStorage
pub fn save_session(token: &str, user: Option<&UserInfo>) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        match user.and_then(|u| serde_json::to_string(u).ok()) {
            Some(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            None => {
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// Get token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Get cached user from localStorage
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
