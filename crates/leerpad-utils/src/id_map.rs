/// Items addressed by a string identifier of their own.
pub trait ItemId {
    fn id(&self) -> &str;
}

#[allow(clippy::module_inception)]
pub mod id_map {
    use super::ItemId;
    use serde::Serialize;
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::Serializer;

    /// Serialize an id-keyed map as a plain sequence of its values.
    pub fn serialize<'a, S, T, I>(map: I, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize + 'a,
        I: IntoIterator<Item = (&'a String, &'a T)>,
    {
        serializer.collect_seq(map.into_iter().map(|(_, item)| item))
    }

    /// Deserialize a sequence of items into a map keyed by each item's id.
    pub fn deserialize<'de, D, T, O>(deserializer: D) -> Result<O, D::Error>
    where
        D: Deserializer<'de>,
        T: ItemId + Deserialize<'de>,
        O: FromIterator<(String, T)>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().map(|item| (item.id().to_owned(), item)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct TestStruct {
        #[serde(with = "id_map")]
        items: IndexMap<String, TestItem>,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct TestItem {
        id: String,
        value: u32,
    }

    impl ItemId for TestItem {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_id_map_deserialize() {
        let test_struct: TestStruct = serde_json::from_str(
            r#"{
            "items": [
                {"id": "a", "value": 2},
                {"id": "b", "value": 4}
            ]
        }"#,
        )
        .unwrap();
        assert_eq!(test_struct.items.len(), 2);
        let keys: Vec<_> = test_struct.items.keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(test_struct.items["b"].value, 4);
    }

    #[test]
    fn test_id_map_serialize() {
        let items = IndexMap::from([
            ("a".to_owned(), TestItem { id: "a".to_owned(), value: 2 }),
            ("b".to_owned(), TestItem { id: "b".to_owned(), value: 4 }),
        ]);
        let test_struct = TestStruct { items };
        let json = serde_json::to_string(&test_struct).unwrap();
        assert_eq!(json, r#"{"items":[{"id":"a","value":2},{"id":"b","value":4}]}"#);
    }
}
