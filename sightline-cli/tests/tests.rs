#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use sightline::geometry::IntersectionType;
    use sightline::io::ext_repr::{ExtAnswer, ExtPrimitive};
    use sightline::util::SamplingConfig;
    use sightline_cli::io;
    use test_case::test_case;

    const QUERIES: &str = "assets/queries.json";
    const CONFIG: &str = "assets/config.json";

    #[test]
    fn config_file_is_parsed() {
        let config: SamplingConfig = io::read_json(Path::new(CONFIG)).unwrap();
        assert_eq!(config, SamplingConfig::new(8, true));
    }

    #[test]
    fn every_query_is_reported() {
        let queries = io::read_queries(Path::new(QUERIES)).unwrap();
        let reports = io::evaluate(&queries, SamplingConfig::default());
        assert_eq!(reports.len(), queries.len());
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.index, i);
            assert!(report.answer.is_some() != report.error.is_some());
        }
    }

    #[test_case(1, true; "point on the unit ellipsoid")]
    #[test_case(3, true; "ray crossing a plane")]
    fn boolean_answers(index: usize, expected: bool) {
        let queries = io::read_queries(Path::new(QUERIES)).unwrap();
        let reports = io::evaluate(&queries[index..=index], SamplingConfig::default());
        assert_eq!(reports[0].answer, Some(ExtAnswer::Boolean(expected)));
    }

    #[test]
    fn segment_through_sphere() {
        let queries = io::read_queries(Path::new(QUERIES)).unwrap();
        let reports = io::evaluate(&queries[2..3], SamplingConfig::default());
        let Some(ExtAnswer::Intersection(intersection)) = &reports[0].answer else {
            panic!("expected an intersection, got {:?}", reports[0]);
        };
        assert_eq!(intersection.kind, IntersectionType::PointSet);
        let ExtPrimitive::PointSet(points) = &intersection.objects[0] else {
            panic!("expected a point set");
        };
        let mut xs = points.iter().map(|p| p[0]).collect::<Vec<_>>();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert!(approx_eq!(f64, xs[0], -1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, xs[1], 1.0, epsilon = 1e-12));
    }

    #[test]
    fn pyramid_in_sight_with_config() {
        let queries = io::read_queries(Path::new(QUERIES)).unwrap();
        let config: SamplingConfig = io::read_json(Path::new(CONFIG)).unwrap();
        let reports = io::evaluate(&queries[0..1], config);
        let Some(ExtAnswer::Intersection(intersection)) = &reports[0].answer else {
            panic!("expected an intersection, got {:?}", reports[0]);
        };
        assert_eq!(intersection.kind, IntersectionType::LineString);
        let ExtPrimitive::LineString(points) = &intersection.objects[0] else {
            panic!("expected a line string");
        };
        assert_eq!(points.len(), 8);
        for p in points {
            assert!(approx_eq!(f64, p[0].abs(), 0.505129425743498, epsilon = 1e-10));
            assert!(approx_eq!(f64, p[2], 5.05129425743498, epsilon = 1e-10));
        }
    }

    #[test]
    fn unsupported_pair_is_an_error() {
        let queries = io::read_queries(Path::new(QUERIES)).unwrap();
        let reports = io::evaluate(&queries[4..5], SamplingConfig::default());
        assert!(reports[0].answer.is_none());
        assert!(reports[0].error.as_ref().unwrap().contains("not supported"));
    }
}
