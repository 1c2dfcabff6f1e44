use super::case_loader::{CaseFailure, CaseResult, TestCase};
/// Runs loaded cases against `Url`
use urlcanon::Url;

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::new();
    let mut case_num = 0;

    for case in cases {
        let TestCase::UrlTest {
            input,
            base,
            spec,
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
            failure,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let url = match &base {
            Some(base) => Url::parse(base.as_str()).resolve(input.as_str()),
            None => Url::parse(input.as_str()),
        };

        let expect_failure = failure == Some(true);
        let mut mismatches = Vec::new();
        if url.is_valid() == expect_failure {
            mismatches.push((
                "validity",
                (if expect_failure { "invalid" } else { "valid" }).to_string(),
                (if url.is_valid() { "valid" } else { "invalid" }).to_string(),
            ));
        }

        let checks = [
            ("spec", spec, url.possibly_invalid_spec()),
            ("scheme", scheme, url.scheme()),
            ("username", username, url.username()),
            ("password", password, url.password()),
            ("host", host, url.host()),
            ("port", port, url.port()),
            ("path", path, url.path()),
            ("query", query, url.query()),
            ("fragment", fragment, url.fragment()),
        ];
        for (field, expected, actual) in checks {
            if let Some(expected) = expected
                && expected != actual
            {
                mismatches.push((field, expected, actual.to_string()));
            }
        }

        if url.is_valid() && Url::parse(url.spec()) != url {
            mismatches.push(("idempotence", url.spec().to_string(), Url::parse(url.spec()).to_string()));
        }

        if mismatches.is_empty() {
            result.passed += 1;
            continue;
        }
        result.failed += 1;
        for (field, expected, actual) in mismatches {
            result.failures.push(CaseFailure {
                case_num,
                input: input.clone(),
                base: base.clone(),
                field,
                expected,
                actual,
            });
        }
    }
    result
}
