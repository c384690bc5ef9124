//! Entity trait defining the core abstraction for all persisted types

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for every record persisted in the document store.
///
/// Entities are identified by an opaque string id assigned by the store at
/// creation time; before that the id is `None`. Id uniqueness is the store's
/// invariant, not the entity's.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The plural collection/resource name used for storage and URLs
    /// (e.g., "clients", "dishes")
    fn collection() -> &'static str;

    /// The singular name used in log and error messages (e.g., "client")
    fn kind() -> &'static str;

    /// The store-assigned identifier, `None` until persisted
    fn id(&self) -> Option<&str>;

    /// Overwrite the identifier. Called by repositories on create (fresh id)
    /// and on update (path id wins over whatever the payload carried).
    fn set_id(&mut self, id: String);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Widget {
        id: Option<String>,
        name: String,
    }

    impl Entity for Widget {
        fn collection() -> &'static str {
            "widgets"
        }

        fn kind() -> &'static str {
            "widget"
        }

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    #[test]
    fn test_id_roundtrip() {
        let mut w = Widget {
            id: None,
            name: "corkscrew".into(),
        };
        assert!(w.id().is_none());

        w.set_id("w-1".into());
        assert_eq!(w.id(), Some("w-1"));
        assert_eq!(Widget::collection(), "widgets");
        assert_eq!(Widget::kind(), "widget");
    }
}
