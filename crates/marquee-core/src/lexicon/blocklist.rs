//! Known uploader, channel and release-group names.
//!
//! Entries are matched case-insensitively as raw substrings, with and
//! without a leading `@`. Keep them distinctive: a short generic entry
//! would cut into ordinary title words.

pub const RELEASE_GROUPS: &[&str] = &[
    // Telegram channels, mirror sites and re-uploaders
    "CineFlixHD",
    "CineFlix",
    "CinemaFlixHD",
    "CinemaHub4u",
    "CineVood",
    "CineVoodHD",
    "CinemaVilla",
    "CinemaKottaga",
    "CineBlaster",
    "CineMaxHD",
    "CineTimeHD",
    "CineWorldHD",
    "FilmyFlyHD",
    "FilmyFly",
    "FilmyMeet",
    "FilmyZilla",
    "FilmyWap",
    "Afilmywap",
    "FilmyHit",
    "FilmyGod",
    "FilmyKeeda",
    "Filmy4Wap",
    "Filmy4Web",
    "FilmyDost",
    "FilmyBeast",
    "FilmyCab",
    "MoviesMod",
    "MoviesModOrg",
    "MoviesFlix",
    "MoviesFlixPro",
    "MoviesVerse",
    "MoviesNation",
    "MoviesKiDuniya",
    "MoviesBaba",
    "MoviesCounter",
    "MoviesJunction",
    "MovieRulz",
    "MovieRulzHD",
    "MoviesRulz",
    "MoviezAddiction",
    "MovieVerse",
    "MovieHub4u",
    "MovieSpapa",
    "MoviesDa",
    "MoviesWood",
    "Movies4Me",
    "Movies4u",
    "Movie4u",
    "MkvCinemas",
    "MkvMoviesPoint",
    "MkvHub",
    "MkvKing",
    "MkvDrama",
    "MkvAnime",
    "MkvCage",
    "MkvMad",
    "MkvPoint",
    "MkvZone",
    "VegaMovies",
    "VegaMoviesHD",
    "VegaMovie",
    "BollyFlix",
    "BollyFlixHD",
    "Bolly4u",
    "Bolly4uOrg",
    "BollyShare",
    "BollyHub",
    "BollyMovies",
    "BollyKing",
    "HDHub4u",
    "HDHub4uTv",
    "HDHub",
    "HdMoviesHub",
    "HDMovies4u",
    "HDMoviesFair",
    "HDMovie2",
    "HDMovieArea",
    "HDPopcorns",
    "HDFriday",
    "HDEncode",
    "KatMovieHD",
    "KatMovie",
    "KatDrama",
    "KatMovies4u",
    "SkyMoviesHD",
    "SkyMovies",
    "WorldFree4u",
    "WorldFree4uTrade",
    "9xMovies",
    "9xFlix",
    "9xRockers",
    "7StarHD",
    "7StarMovies",
    "123MKV",
    "123Movies",
    "1337x",
    "1TamilMV",
    "1TamilBlasters",
    "TamilMV",
    "TamilBlasters",
    "TamilRockers",
    "TamilYogi",
    "TamilGun",
    "TamilDhool",
    "TamilPlay",
    "TamilMob",
    "TamilPrint",
    "TamilUltra",
    "TamilVaathi",
    "TeluguMV",
    "TeluguWap",
    "TeluguPalaka",
    "MalluMV",
    "MalluRockers",
    "MalluCinemas",
    "KannadaMasti",
    "Isaimini",
    "Isaidub",
    "Jiorockers",
    "Todaypk",
    "Movierulzz",
    "Khatrimaza",
    "KhatriMazaFull",
    "Jalshamoviez",
    "JalshaMoviezHD",
    "SSRMovies",
    "ExtraMovies",
    "Mp4Moviez",
    "Mp4Mania",
    "RdxHD",
    "PagalMovies",
    "PagalWorld",
    "PagalFree",
    "DesireMovies",
    "DownloadHub",
    "Downloadhub4u",
    "FilmyHunk",
    "OkJatt",
    "Mp4Hindi",
    "HindiLinks4u",
    "Hindilinks",
    "HindiMovies",
    "UWatchFree",
    "WatchOnlineMovies",
    "Ofilmywap",
    "Coolmoviez",
    "Sdmoviespoint",
    "MoviesPoint",
    "Filmypur",
    "Filmywap4u",
    "Kuttymovies",
    "KuttyWeb",
    "Tamilrasigan",
    "Madrasrockers",
    "MoviesAnywhere",
    "DvdPlay",
    "DvdWap",
    "DvdVilla",
    "FlixHQ",
    "FlixTor",
    "FmoviesTo",
    "Fmovies",
    "Putlocker",
    "SolarMovie",
    "GoMovies",
    "YesMovies",
    "LookMovie",
    "Soap2Day",
    "PrimeWire",
    "Bflix",
    "Dramacool",
    "KissAsian",
    "KissAnime",
    "AnimePahe",
    "AnimeKaizoku",
    "AnimeOut",
    "AnimeTime",
    "GogoAnime",
    "NyaaSi",
    "HorribleSubs",
    "SubsPlease",
    "EraiRaws",
    "Erai-raws",
    "ToonWorld4All",
    "ToonsHub",
    "ToonHub",
    "HindiToons",
    "WebSeriesHub",
    "WebSeriesFlix",
    "WebSeriesPoint",
    "OTTFlix",
    "OTTMovies",
    "OTTHub",
    "OTTPlanet",
    "KoreanDramaHub",
    "KDramaHub",
    "KDramaWorld",
    "DramaDay",
    "DramaNice",
    "Moviezwap",
    "MoviesMint",
    "MoviesHippo",
    "MoviesVerseHD",
    "MoviesLand",
    "MoviesUniverse",
    "MoviesAdda",
    "MoviesBay",
    "MoviesMela",
    "MoviesClub4u",
    "Movies365",
    "MovieFlixPro",
    "MovieKhor",
    "MovieMora",
    "MovieOrca",
    "FilmyMaza",
    "FilmyVilla",
    "FilmyShub",
    "FilmyAppu",
    "Filmy4Fly",
    "FilmyZap",
    "Bolly2Tolly",
    "BollyTube",
    "BollyWap",
    "HD4Hub",
    "HDMoviesPoint",
    "HDMovieHub",
    "HDMoviesPlus",
    "HDWebMovies",
    "HDMoviesDen",
    "TorrentGalaxy",
    "TorrentCounter",
    "TorrentKing",
    "KickassTorrents",
    "ThePirateBay",
    "LimeTorrents",
    "MagnetDL",
    "TorLock",
    "YourBittorrent",
    "TamilMVUpdates",
    "TamilBlastersOfficial",
    "TamilKing",
    "TamilLand",
    "TeluguMovies4u",
    "TeluguVilla",
    "MalluWap",
    "MalluWood",
    "KannadaWap",
    "KannadaMovies4u",
    "BengaliMovies4u",
    "MarathiMovies4u",
    "PunjabiMovies4u",
    "AnimeFlix",
    "AnimeDubHindi",
    "AnimeWorldIndia",
    "AnimeSalt",
    "ToonStream",
    "CartoonBag",
    "KDramaClub",
    "AsianDramaHub",
    "WebSeriesWorld",
    "OTTPlay4u",
    "PrimeFlixHD",
    "MX4Movies",
    "Movies24x7",
    "MoviesTime4u",
    "CineHub24",
    // Scene and P2P groups
    "YTS.MX",
    "YTS.AM",
    "YTS.LT",
    "YIFY",
    "RARBG",
    "GalaxyRG",
    "GalaxyTV",
    "TGxGoodies",
    "ETRG",
    "ETTV",
    "EZTV",
    "Pahe.in",
    "PaheIn",
    "ShAaNiG",
    "CMRG",
    "TEPES",
    "playWEB",
    "ION10",
    "ION265",
    "Ganool",
    "Anoxmous",
    "Tigole",
    "RMTeam",
    "PSArips",
    "PSAHD",
    "MeGusta",
    "LOL-HDTV",
    "AVS-HDTV",
    "SVA-HDTV",
    "NOGRP",
    "FGT",
    "EVO-RG",
    "HDCLUB",
    "HDChina",
    "CtrlHD",
    "FraMeSToR",
    "BHDStudio",
    "Bluevo",
    "NAISU",
    "PECULATE",
    "TEPES-RG",
    "MZABI",
    "WEBLiNE",
    "HDSector",
    "SH3LBY",
    "MoviesOnly",
    "Pog42",
];
