/// (De)Serialize a [f64] rounded to 3 decimal places
pub mod f64_dp3 {
    use serde::{Deserialize, Serialize};
    use serde::{Deserializer, Serializer};

    /// Serialize a [f64] rounded to 3 decimal places
    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        const D: f64 = (10_u32.pow(3)) as f64;
        ((v * D).round() / D).serialize(s)
    }

    /// Deserialize a [f64]
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        f64::deserialize(d)
    }
}

/// (De)Serialize a [`na::Point3<f64>`] rounded to 6 decimal places
pub mod na_point3_f64_dp6 {
    use serde::{Deserialize, Serialize};
    use serde::{Deserializer, Serializer};

    /// Serialize a [`na::Point3<f64>`] rounded to 6 decimal places
    pub fn serialize<S: Serializer>(v: &na::Point3<f64>, s: S) -> Result<S::Ok, S::Error> {
        const D: f64 = (10_u32.pow(6)) as f64;
        na::Point3::from(v.coords.map(|c| (c * D).round() / D)).serialize(s)
    }

    /// Deserialize a [`na::Point3<f64>`]
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<na::Point3<f64>, D::Error> {
        na::Point3::<f64>::deserialize(d)
    }
}

/// (De)Serialize a [`na::UnitQuaternion<f64>`], renormalizing it when deserializing
pub mod na_unit_quaternion_f64_normalized {
    use serde::{Deserialize, Serialize};
    use serde::{Deserializer, Serializer};

    /// Serialize a [`na::UnitQuaternion<f64>`]
    pub fn serialize<S: Serializer>(v: &na::UnitQuaternion<f64>, s: S) -> Result<S::Ok, S::Error> {
        v.serialize(s)
    }

    /// Deserialize a [`na::UnitQuaternion<f64>`], normalizing the stored quaternion
    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<na::UnitQuaternion<f64>, D::Error> {
        let q = na::Quaternion::<f64>::deserialize(d)?;
        if !q.coords.iter().all(|c| c.is_finite()) || q.norm() == 0.0 {
            return Err(serde::de::Error::custom(format!(
                "rotation quaternion {:?} can't be normalized",
                q.coords
            )));
        }
        Ok(na::UnitQuaternion::new_normalize(q))
    }
}
