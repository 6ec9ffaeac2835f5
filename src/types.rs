use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub avatar_url: String,
}

/// One search hit, in the shape GitHub returns it. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
    #[serde(default)]
    pub watchers_count: u64,
    pub html_url: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_github_item() {
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 10270250,
                "name": "react",
                "full_name": "facebook/react",
                "owner": { "login": "facebook", "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4" },
                "html_url": "https://github.com/facebook/react",
                "description": "The library for web and native user interfaces.",
                "stargazers_count": 230000,
                "watchers_count": 230000
            }]
        }"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.items.len(), 1);
        let repo = &resp.items[0];
        assert_eq!(repo.id, 10270250);
        assert_eq!(repo.owner.avatar_url, "https://avatars.githubusercontent.com/u/69631?v=4");
        assert_eq!(repo.watchers_count, 230000);
    }

    #[test]
    fn test_null_description() {
        let body = r#"{"id":1,"name":"x","description":null,"owner":{"avatar_url":""},"watchers_count":0,"html_url":"u"}"#;
        let repo: Repository = serde_json::from_str(body).unwrap();
        assert_eq!(repo.description, None);
    }
}
