use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Opt;

// Same wire shape as `Option<T>`.
impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Opt::Present(val) => serializer.serialize_some(val),
            Opt::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Opt::from)
    }
}
