#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of a `name=value` program argument.
/// An argument can go by several spellings, usually a short and a long form.
///
/// /!\ As this reads global state, wrap tests with [with_env_args].
pub fn retrieve_arg_value(arg_names: &[&str]) -> Option<String> {
    let args = get_env_args();
    for arg in args {
        for arg_name in arg_names {
            let arg_prefix = format!("{arg_name}=");
            if arg.starts_with(&arg_prefix) {
                return arg.split_once("=").map(|(_, value)| value.to_owned());
            }
        }
    }

    None
}

/// Same as [retrieve_arg_value], for arguments the app can't run without.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(&[arg_name]).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` hosting the program args during tests.
    /// [with_env_args] swaps it in for the duration of a test, then restores it.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.clone().into_inner())
}

#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["-i=a@b.com".to_owned()],
            vec!["--identifier=a@b.com".to_owned()],
            vec!["-s=pw123".to_owned()],
            vec!["--another-arg=wrong".to_owned()],
            vec![]
        },
        arg_names = {
            vec!["-i", "--identifier"],
            vec!["-i", "--identifier"],
            vec!["-s", "--secret"],
            vec!["-s", "--secret"],
            vec!["-s", "--secret"]
        },
        expected_result = {
            Some("a@b.com".to_owned()),
            Some("a@b.com".to_owned()),
            Some("pw123".to_owned()),
            None,
            None
        }
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_names: Vec<&str>,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(&arg_names));

        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_expected_arg_value() {
        let args = vec!["--endpoint=https://auth.example.com/login".to_owned()];

        let result =
            with_env_args(args, || retrieve_expected_arg_value("--endpoint", "error!")).unwrap();

        assert_eq!("https://auth.example.com/login", result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_arg_value() {
        let result = with_env_args(vec![], || retrieve_expected_arg_value("--endpoint", "error!"))
            .unwrap_err();

        assert_eq!("error!", result);
    }
}
