//! Tagged JSON representation: `{"tag": "success", "data": ...}`.

use serde::{ Deserialize, Deserializer, Serialize, Serializer };

use crate::remote_data::RemoteData;


#[derive(Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum Ref<'a, E, T> {
    Idle,
    Loading,
    Success { data: &'a T },
    Failure { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum Owned<E, T> {
    Idle,
    Loading,
    Success { data: T },
    Failure { error: E },
}

impl<E: Serialize, T: Serialize> Serialize for RemoteData<E, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = self.as_ref().fold(
            || Ref::Idle,
            || Ref::Loading,
            |data| Ref::Success { data },
            |error| Ref::Failure { error },
        );
        repr.serialize(serializer)
    }
}

impl<'de, E: Deserialize<'de>, T: Deserialize<'de>> Deserialize<'de> for RemoteData<E, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RemoteData<E, T>, D::Error> {
        Ok(match Owned::deserialize(deserializer)? {
            Owned::Idle => RemoteData::Idle,
            Owned::Loading => RemoteData::Loading,
            Owned::Success { data } => RemoteData::Success(data),
            Owned::Failure { error } => RemoteData::Failure(error),
        })
    }
}


#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::remote_data::{ failure, idle, loading, success };
    use crate::{ RemoteData, Status, Tag };

    type Rd = RemoteData<String, u32>;

    #[test]
    fn tagged_shape() {
        assert_eq!(serde_json::to_value(&idle::<String, u32>()).unwrap(), json!({ "tag": "idle" }));
        assert_eq!(serde_json::to_value(&loading::<String, u32>()).unwrap(), json!({ "tag": "loading" }));
        assert_eq!(
            serde_json::to_value(&success::<String, u32>(3)).unwrap(),
            json!({ "tag": "success", "data": 3 })
        );
        assert_eq!(
            serde_json::to_value(&failure::<_, u32>("404".to_string())).unwrap(),
            json!({ "tag": "failure", "error": "404" })
        );
    }

    #[test]
    fn parse_tagged() {
        let rd: Rd = serde_json::from_str(r#"{"tag":"success","data":7}"#).unwrap();
        assert_eq!(rd, success(7));
        let rd: Rd = serde_json::from_str(r#"{"error":"boom","tag":"failure"}"#).unwrap();
        assert_eq!(rd, failure("boom".to_string()));
        let rd: Rd = serde_json::from_str(r#"{"tag":"loading"}"#).unwrap();
        assert_eq!(rd, loading());
    }

    #[test]
    fn reject_malformed() {
        assert!(serde_json::from_str::<Rd>(r#"{"tag":"pending"}"#).is_err());
        assert!(serde_json::from_str::<Rd>(r#"{"tag":"success"}"#).is_err());
        assert!(serde_json::from_str::<Rd>(r#"{"data":1}"#).is_err());
    }

    #[test]
    fn nested_payload() {
        let rd: RemoteData<(), Vec<RemoteData<(), bool>>> = success(vec![idle(), success(true)]);
        let text = serde_json::to_string(&rd).unwrap();
        assert_eq!(serde_json::from_str::<RemoteData<(), Vec<RemoteData<(), bool>>>>(&text).unwrap(), rd);
    }

    #[test]
    fn status_names() {
        assert_eq!(serde_json::to_value(Status::Loading).unwrap(), json!("loading"));
        assert_eq!(serde_json::from_value::<Tag>(json!("failure")).unwrap(), Tag::Failure);
    }
}
