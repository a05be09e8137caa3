use survey_statistics::{
    CorrelationResult, DashboardMetrics, Metric, ParticipantRecord, Scatter, Sex, SexComparison,
    Summary,
};

pub fn summary(metric: Metric, s: &Summary<f64>) -> String {
    format!(
        "{metric}\n  mean    {:.2}\n  median  {:.2}\n  stddev  {:.2}\n  min     {:.2}\n  max     {:.2}\n",
        s.mean, s.median, s.std_dev, s.min, s.max
    )
}

pub fn correlations(results: &[CorrelationResult]) -> String {
    let mut out = String::from("Screen Time correlations\n");
    for r in results {
        out += &format!(
            "  {:<15} r = {:>7.4}  (alpha {})\n",
            r.variable.label(),
            r.correlation,
            r.significance
        );
    }
    out
}

pub fn trend(s: &Scatter) -> String {
    let [(x0, y0), (x1, y1)] = s.trend.endpoints();
    format!(
        "{} vs {} ({} points)\n  slope      {:.4}\n  intercept  {:.4}\n  from ({x0:.2}, {y0:.2}) to ({x1:.2}, {y1:.2})\n",
        s.y,
        s.x,
        s.points.len(),
        s.trend.slope,
        s.trend.intercept
    )
}

pub fn comparison(rows: &[SexComparison]) -> String {
    let mut out = format!("  {:<17} {:>9} {:>9}\n", "", "Female", "Male");
    for r in rows {
        out += &format!("  {:<17} {:>9.2} {:>9.2}\n", r.metric.label(), r.female, r.male);
    }
    out
}

pub fn dashboard(m: &DashboardMetrics) -> String {
    format!(
        "participants      {}\n  female          {}\n  male            {}\naverage screen    {} min\naverage recovery  {}\n",
        m.participant_count, m.female_count, m.male_count, m.average_phone_time, m.average_recovery
    )
}

pub fn listing(records: &[ParticipantRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out += &format!(
            "{:>4}  {:<10} {:>3} {}  screen {:>5}  dep {:>3}  anx {:>3}  sleep {:>3}  rec {:>4}\n",
            r.id,
            r.date,
            r.age,
            match r.sex {
                Sex::Female => 'f',
                Sex::Male => 'm',
            },
            r.phone_time,
            r.depression,
            r.anxiety,
            r.sleep,
            r.recovery
        );
    }
    out
}
