//! Generic platform and uploader noise removed from resolved titles.
//!
//! These only ever match as whole words and only inside the title region.
//! Words that also occur in real titles (`movie`, `free`, `new`, `top`,
//! `drive`, `crew`) stay out of the list.

pub const SPAM_WORDS: &[&str] = &[
    // Platforms and channels
    "channel", "channels", "bot", "bots", "telegram", "tg", "whatsapp", "youtube", "yt",
    "instagram", "insta", "facebook", "fb", "twitter", "discord", "admins",
    // Calls to action
    "joinus", "subscribe", "download", "downloads", "downloaded", "upload", "uploaded",
    "uploader", "uploads", "donate",
    // Sites and hosting
    "www", "http", "https", "com", "org", "net", "website", "url", "mirrors", "gdrive",
    "torrent", "torrents", "magnet", "streaming", "adfree",
    // Uploader promotion
    "premium", "vip", "exclusive", "latest", "trending", "viral", "hq",
    // Rip and encode markers
    "hd", "fhd", "uhd", "rip", "rips", "ripped", "hdrip", "webrip", "web", "dl", "webdl",
    "bluray", "brrip", "bdrip", "dvdrip", "dvdscr", "hdcam", "camrip", "hdts", "hdtc",
    "predvd", "prehd", "hdtv", "tvrip", "x264", "x265", "h264", "h265", "hevc", "avc", "aac",
    "ac3", "dts", "atmos", "ddp", "10bit", "8bit", "hdr", "hdr10", "sdr", "repack", "encoded",
    "mkv", "mp4", "avi",
    // Subtitles and dubbing
    "esub", "esubs", "sub", "subs", "subbed", "subtitle", "subtitles", "dubbed",
    // Streaming service tags
    "amzn", "netflix", "hotstar", "zee5", "sonyliv", "jiocinema", "primevideo", "dsnp", "hmax",
    "atvp", "mxplayer", "altbalaji",
];
