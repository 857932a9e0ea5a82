use anyhow::Context;
use kmeans::{KMeans, Planar, Point};
use tokio::io::{AsyncWriteExt, BufWriter};

/// `"<original_index> <cluster_id>"` per point, in load order
pub fn format_assigned(points: &[Point]) -> String {
    let mut sorted: Vec<&Point> = points.iter().collect();
    sorted.sort_by_key(|p| p.original_index());
    sorted
        .iter()
        .map(|p| format!("{} {}\n", p.original_index(), p.cluster_id()))
        .collect()
}

/// Label line followed by one `"<x>, <y>"` line per member, labels ascending
pub fn format_report(model: &KMeans) -> String {
    let mut result = String::new();
    for (cluster_id, members) in model.clusters() {
        result.push_str(&format!("{}\n", cluster_id));
        for point in members {
            result.push_str(&format!("{}, {}\n", point.x(), point.y()));
        }
    }
    result
}

/// Write the assignment file, replacing any previous one
pub async fn write_assigned(points: &[Point], path: &str) -> anyhow::Result<()> {
    let data_file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("failed to create output file {}", path))?;
    let mut data_file = BufWriter::new(data_file);
    data_file.write_all(format_assigned(points).as_bytes()).await?;
    data_file.flush().await?;
    tracing::info!(path, lines = points.len(), "assignments written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmeans::Seeding;

    fn fitted() -> KMeans {
        let points = [(0.0, 0.0), (10.0, 10.0), (0.0, 1.0), (10.0, 11.0)]
            .iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(*x, *y, i))
            .collect();
        let mut model = KMeans::new(points);
        model.initialize_centroids(2, &Seeding::first_k(2)).unwrap();
        model.fit().unwrap();
        model
    }

    #[test]
    fn assignments_follow_load_order() {
        assert_eq!(format_assigned(fitted().points()), "0 0\n1 1\n2 0\n3 1\n");
    }

    #[test]
    fn report_groups_members_under_labels() {
        assert_eq!(format_report(&fitted()), "0\n0, 0\n0, 1\n1\n10, 10\n10, 11\n");
    }

    #[tokio::test]
    async fn output_file_is_overwritten() {
        let path = std::env::temp_dir()
            .join(format!("geo-cluster-{}-clusters.txt", std::process::id()))
            .to_string_lossy()
            .into_owned();
        tokio::fs::write(&path, "stale content that is longer than the result\n").await.unwrap();

        let model = fitted();
        write_assigned(model.points(), &path).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(written, "0 0\n1 1\n2 0\n3 1\n");
    }
}
