use iced_lightbox::app::{self, Flags};
use iced_lightbox::config::SortOrder;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        sort: args.opt_value_from_str::<_, SortOrder>("--sort").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
