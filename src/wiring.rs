//! 配線: 標準アダプタで usecase を組み立てる

use std::sync::Arc;

use crate::adapter::{
    EntropyIdGenerator, OpenAiChat, StdClock, StdConsole, StdEnvResolver, StdFileSystem,
};
use crate::domain::ApiKey;
use crate::ports::outbound::{
    ChatCompletion, Clock, ConsoleInput, EnvResolver, FileSystem, IdGenerator, Log,
};
use crate::usecase::invoke::InvokeUseCase;

/// 標準アダプタ一式
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub console: Arc<dyn ConsoleInput>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub id_gen: Arc<dyn IdGenerator>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_scribe() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    App {
        fs,
        console: Arc::new(StdConsole),
        env_resolver: Arc::new(StdEnvResolver),
        id_gen: Arc::new(EntropyIdGenerator::new(clock)),
    }
}

/// 資格情報ロード後に InvokeUseCase を組み立てる
pub fn invoke_use_case(app: &App, api_key: ApiKey, logger: Arc<dyn Log>) -> InvokeUseCase {
    let chat: Arc<dyn ChatCompletion> = Arc::new(OpenAiChat::new(api_key));
    InvokeUseCase::new(
        Arc::clone(&app.fs),
        Arc::clone(&app.id_gen),
        chat,
        logger,
    )
}
