use anyhow::Context;
use kmeans::{dataset::parse_points, Point};

/// Read the whole input file and parse it into points
pub async fn load_data(path: &str) -> anyhow::Result<Vec<Point>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read input file {}", path))?;
    let points = parse_points(&contents, path)?;
    tracing::info!(path, points = points.len(), "points loaded");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmeans::KMeansError;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("geo-cluster-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn loads_points_from_disk() {
        let path = temp_path("load_ok.txt");
        tokio::fs::write(&path, "0,0\n0,1\n10,10\n").await.unwrap();
        let points = load_data(&path).await.unwrap();
        assert_eq!(points.len(), 3);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn parse_error_survives_the_wrapper() {
        let path = temp_path("load_bad.txt");
        tokio::fs::write(&path, "0,0\nabc,1.0\n").await.unwrap();
        let err = load_data(&path).await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();
        match err.downcast_ref::<KMeansError>() {
            Some(KMeansError::Parse { line, .. }) => assert_eq!(*line, 2),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = load_data(&temp_path("does_not_exist.txt")).await.unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }
}
