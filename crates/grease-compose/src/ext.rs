/// Extension trait for [`na::Vector3<f64>`].
pub trait Vector3Ext
where
    Self: Sized,
{
    /// a new vector by taking the mins of each x, y and z values
    fn mins(&self, other: &Self) -> Self;
    /// a new vector by taking the maxs of each x, y and z values
    fn maxs(&self, other: &Self) -> Self;
    /// Whether all components are finite (not NaN or infinite)
    fn is_finite(&self) -> bool;
    /// Parse from a string of three comma separated components, e.g. `1.0,0.0,2.5`
    fn parse_components(s: &str) -> anyhow::Result<Self>;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector3Ext for na::Vector3<f64> {
    fn mins(&self, other: &Self) -> Self {
        self.zip_map(other, f64::min)
    }

    fn maxs(&self, other: &Self) -> Self {
        self.zip_map(other, f64::max)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }

    fn parse_components(s: &str) -> anyhow::Result<Self> {
        let components = s
            .split(',')
            .map(|c| {
                c.trim().parse::<f64>().map_err(|e| {
                    anyhow::anyhow!("Parsing component \"{c}\" of vector \"{s}\" failed, Err: {e:?}")
                })
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        match components.as_slice() {
            &[x, y, z] => Ok(na::vector![x, y, z]),
            _ => Err(anyhow::anyhow!(
                "Expected three comma separated components, found {} in \"{s}\"",
                components.len()
            )),
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0])
            && approx::relative_eq!(self[1], other[1])
            && approx::relative_eq!(self[2], other[2])
    }
}

#[cfg(test)]
mod tests {
    use super::Vector3Ext;

    #[test]
    fn parse_components() {
        let v = na::Vector3::<f64>::parse_components("1.0, -2,3.5").unwrap();
        assert!(v.approx_eq(&na::vector![1.0, -2.0, 3.5]));

        assert!(na::Vector3::<f64>::parse_components("1.0,2.0").is_err());
        assert!(na::Vector3::<f64>::parse_components("1.0,x,2.0").is_err());
    }

    #[test]
    fn mins_maxs() {
        let a = na::vector![1.0, 5.0, -2.0];
        let b = na::vector![3.0, -1.0, 0.0];
        assert!(a.mins(&b).approx_eq(&na::vector![1.0, -1.0, -2.0]));
        assert!(a.maxs(&b).approx_eq(&na::vector![3.0, 5.0, 0.0]));
    }
}
