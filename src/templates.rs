//! Generated-file templates and substitution.
//!
//! The build descriptors target Visual Studio 2022 (v143, x64, C++20).
//! Substitution uses explicit `@TOKEN@` markers rather than `format!`
//! because the MSBuild and solution formats are full of literal braces.
//!
//! DLL deployment is an MSBuild `<Copy>` target (`CopySdlDlls`) driven
//! by wildcard item includes, not a shell post-build command.

use crate::core::project::ProjectDescriptor;

const SLN_TEMPLATE: &str = r#"Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17.3.32929.385
MinimumVisualStudioVersion = 10.0.40219.1
Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "@PROJ_NAME@", "@PROJ_NAME@.vcxproj", "{@PROJ_GUID@}"
EndProject
Global
    GlobalSection(SolutionConfigurationPlatforms) = preSolution
        Debug|x64 = Debug|x64
        Release|x64 = Release|x64
    EndGlobalSection
    GlobalSection(ProjectConfigurationPlatforms) = postSolution
        {@PROJ_GUID@}.Debug|x64.ActiveCfg = Debug|x64
        {@PROJ_GUID@}.Debug|x64.Build.0 = Debug|x64
        {@PROJ_GUID@}.Release|x64.ActiveCfg = Release|x64
        {@PROJ_GUID@}.Release|x64.Build.0 = Release|x64
    EndGlobalSection
    GlobalSection(SolutionProperties) = preSolution
        HideSolutionNode = FALSE
    EndGlobalSection
    GlobalSection(ExtensibilityGlobals) = postSolution
        SolutionGuid = {@SLN_GUID@}
    EndGlobalSection
EndGlobal
"#;

const VCXPROJ_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup Label="ProjectConfigurations">
    <ProjectConfiguration Include="Debug|x64">
      <Configuration>Debug</Configuration>
      <Platform>x64</Platform>
    </ProjectConfiguration>
    <ProjectConfiguration Include="Release|x64">
      <Configuration>Release</Configuration>
      <Platform>x64</Platform>
    </ProjectConfiguration>
  </ItemGroup>

  <PropertyGroup Label="Globals">
    <VCProjectVersion>17.0</VCProjectVersion>
    <Keyword>Win32Proj</Keyword>
    <ProjectGuid>{@PROJ_GUID@}</ProjectGuid>
    <RootNamespace>@PROJ_NAME@</RootNamespace>
    <ProjectName>@PROJ_NAME@</ProjectName>
    <WindowsTargetPlatformVersion>10.0</WindowsTargetPlatformVersion>
  </PropertyGroup>

  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.Default.props" />

  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|x64'" Label="Configuration">
    <ConfigurationType>Application</ConfigurationType>
    <UseDebugLibraries>true</UseDebugLibraries>
    <PlatformToolset>v143</PlatformToolset>
    <CharacterSet>Unicode</CharacterSet>
  </PropertyGroup>

  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|x64'" Label="Configuration">
    <ConfigurationType>Application</ConfigurationType>
    <UseDebugLibraries>false</UseDebugLibraries>
    <PlatformToolset>v143</PlatformToolset>
    <WholeProgramOptimization>true</WholeProgramOptimization>
    <CharacterSet>Unicode</CharacterSet>
  </PropertyGroup>

  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.props" />

  <ImportGroup Label="ExtensionSettings" />
  <ImportGroup Label="Shared" />

  <ImportGroup Label="PropertySheets" Condition="'$(Configuration)|$(Platform)'=='Debug|x64'">
    <Import Project="$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props" Condition="exists('$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props')" Label="LocalAppDataPlatform" />
  </ImportGroup>
  <ImportGroup Label="PropertySheets" Condition="'$(Configuration)|$(Platform)'=='Release|x64'">
    <Import Project="$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props" Condition="exists('$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props')" Label="LocalAppDataPlatform" />
  </ImportGroup>

  <PropertyGroup Label="UserMacros" />

  <PropertyGroup>
    <OutDir>$(ProjectDir)bin\$(Configuration)\</OutDir>
    <IntDir>$(ProjectDir)intermediate\$(Configuration)\</IntDir>
  </PropertyGroup>

  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Debug|x64'">
    <ClCompile>
      <WarningLevel>Level3</WarningLevel>
      <SDLCheck>true</SDLCheck>
      <ConformanceMode>true</ConformanceMode>
      <LanguageStandard>stdcpp20</LanguageStandard>
      <PreprocessorDefinitions>_DEBUG;_CRT_SECURE_NO_WARNINGS;NOMINMAX;%(PreprocessorDefinitions)</PreprocessorDefinitions>
      <AdditionalIncludeDirectories>$(ProjectDir)include;@ALL_INCLUDES@;%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>
    </ClCompile>
    <Link>
      <SubSystem>Console</SubSystem>
      <GenerateDebugInformation>true</GenerateDebugInformation>
      <AdditionalLibraryDirectories>@ALL_LIBDIRS@;%(AdditionalLibraryDirectories)</AdditionalLibraryDirectories>
      <AdditionalDependencies>@ALL_LIBS@;%(AdditionalDependencies)</AdditionalDependencies>
    </Link>
  </ItemDefinitionGroup>

  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Release|x64'">
    <ClCompile>
      <WarningLevel>Level3</WarningLevel>
      <FunctionLevelLinking>true</FunctionLevelLinking>
      <IntrinsicFunctions>true</IntrinsicFunctions>
      <SDLCheck>true</SDLCheck>
      <ConformanceMode>true</ConformanceMode>
      <LanguageStandard>stdcpp20</LanguageStandard>
      <PreprocessorDefinitions>NDEBUG;_CRT_SECURE_NO_WARNINGS;NOMINMAX;%(PreprocessorDefinitions)</PreprocessorDefinitions>
      <AdditionalIncludeDirectories>$(ProjectDir)include;@ALL_INCLUDES@;%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>
    </ClCompile>
    <Link>
      <SubSystem>Console</SubSystem>
      <EnableCOMDATFolding>true</EnableCOMDATFolding>
      <OptimizeReferences>true</OptimizeReferences>
      <AdditionalLibraryDirectories>@ALL_LIBDIRS@;%(AdditionalLibraryDirectories)</AdditionalLibraryDirectories>
      <AdditionalDependencies>@ALL_LIBS@;%(AdditionalDependencies)</AdditionalDependencies>
    </Link>
  </ItemDefinitionGroup>

  <!-- Explicit file list; VS dislikes wildcards here -->
  <ItemGroup>
    <ClCompile Include="src\main.cpp" />
    <ClCompile Include="src\app.cpp" />
  </ItemGroup>

  <ItemGroup>
    <ClInclude Include="include\@PROJ_NAME@\app.h" />
  </ItemGroup>

  <ItemGroup>
    <None Include="assets\.keep" />
  </ItemGroup>

  <Target Name="CopySdlDlls" AfterTargets="Build">
    <ItemGroup>
      <SdlDlls Include="@DLL_GLOBS@" />
    </ItemGroup>

    <Copy
      SourceFiles="@(SdlDlls)"
      DestinationFolder="$(OutDir)"
      SkipUnchangedFiles="true"
      Retries="2"
      RetryDelayMilliseconds="250"
      Condition="'@(SdlDlls)' != ''" />
  </Target>

  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.targets" />
  <ImportGroup Label="ExtensionTargets" />
</Project>
"#;

const FILTERS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Filter Include="Source Files">
      <UniqueIdentifier>{@SOURCE_GUID@}</UniqueIdentifier>
    </Filter>
    <Filter Include="Header Files">
      <UniqueIdentifier>{@HEADER_GUID@}</UniqueIdentifier>
    </Filter>
    <Filter Include="Asset Files">
      <UniqueIdentifier>{@ASSET_GUID@}</UniqueIdentifier>
    </Filter>
  </ItemGroup>

  <ItemGroup>
    <ClCompile Include="src\main.cpp">
      <Filter>Source Files</Filter>
    </ClCompile>
    <ClCompile Include="src\app.cpp">
      <Filter>Source Files</Filter>
    </ClCompile>
  </ItemGroup>

  <ItemGroup>
    <ClInclude Include="include\@PROJ_NAME@\app.h">
      <Filter>Header Files</Filter>
    </ClInclude>
  </ItemGroup>

  <ItemGroup>
    <None Include="assets\.keep">
      <Filter>Asset Files</Filter>
    </None>
  </ItemGroup>
</Project>
"#;

const APP_H: &str = r#"#pragma once

#include <SDL.h>
#include <SDL_image.h>

class App {
public:
    bool init();
    void run();
    void shutdown();

private:
    SDL_Window* window_ = nullptr;
    SDL_Renderer* renderer_ = nullptr;
    bool running_ = false;
};
"#;

const APP_CPP: &str = r#"#include "@PROJ_NAME@/app.h"
#include <iostream>

bool App::init()
{
    if (SDL_Init(SDL_INIT_VIDEO) != 0) {
        std::cerr << "SDL_Init Error: " << SDL_GetError() << std::endl;
        return false;
    }

    int imgFlags = IMG_INIT_PNG | IMG_INIT_JPG;
    if (!(IMG_Init(imgFlags) & imgFlags)) {
        std::cerr << "IMG_Init Error: " << IMG_GetError() << std::endl;
        SDL_Quit();
        return false;
    }

    window_ = SDL_CreateWindow(
        "@PROJ_NAME@",
        SDL_WINDOWPOS_CENTERED,
        SDL_WINDOWPOS_CENTERED,
        800, 600,
        SDL_WINDOW_SHOWN
    );

    if (!window_) {
        std::cerr << "SDL_CreateWindow Error: " << SDL_GetError() << std::endl;
        IMG_Quit();
        SDL_Quit();
        return false;
    }

    renderer_ = SDL_CreateRenderer(window_, -1, SDL_RENDERER_ACCELERATED | SDL_RENDERER_PRESENTVSYNC);
    if (!renderer_) {
        std::cerr << "SDL_CreateRenderer Error: " << SDL_GetError() << std::endl;
        SDL_DestroyWindow(window_);
        window_ = nullptr;
        IMG_Quit();
        SDL_Quit();
        return false;
    }

    running_ = true;
    return true;
}

void App::run()
{
    while (running_) {
        SDL_Event e;
        while (SDL_PollEvent(&e)) {
            if (e.type == SDL_QUIT) running_ = false;
        }

        SDL_SetRenderDrawColor(renderer_, 30, 30, 36, 255);
        SDL_RenderClear(renderer_);
        SDL_RenderPresent(renderer_);
    }
}

void App::shutdown()
{
    if (renderer_) {
        SDL_DestroyRenderer(renderer_);
        renderer_ = nullptr;
    }
    if (window_) {
        SDL_DestroyWindow(window_);
        window_ = nullptr;
    }
    IMG_Quit();
    SDL_Quit();
}
"#;

const MAIN_CPP: &str = r#"#include "@PROJ_NAME@/app.h"

int main(int, char**)
{
    App app;
    if (!app.init()) return 1;
    app.run();
    app.shutdown();
    return 0;
}
"#;

/// Render the `.sln` solution file.
pub fn render_solution(desc: &ProjectDescriptor) -> String {
    SLN_TEMPLATE
        .replace("@PROJ_NAME@", &desc.name)
        .replace("@PROJ_GUID@", &desc.guids.project)
        .replace("@SLN_GUID@", &desc.guids.solution)
}

/// Render the `.vcxproj` project file.
pub fn render_vcxproj(desc: &ProjectDescriptor) -> String {
    VCXPROJ_TEMPLATE
        .replace("@PROJ_NAME@", &desc.name)
        .replace("@PROJ_GUID@", &desc.guids.project)
        .replace("@ALL_INCLUDES@", &desc.includes)
        .replace("@ALL_LIBDIRS@", &desc.lib_dirs)
        .replace("@ALL_LIBS@", &desc.libs)
        .replace("@DLL_GLOBS@", &desc.dll_globs)
}

/// Render the `.vcxproj.filters` file.
pub fn render_filters(desc: &ProjectDescriptor) -> String {
    FILTERS_TEMPLATE
        .replace("@PROJ_NAME@", &desc.name)
        .replace("@SOURCE_GUID@", &desc.guids.source_filter)
        .replace("@HEADER_GUID@", &desc.guids.header_filter)
        .replace("@ASSET_GUID@", &desc.guids.asset_filter)
}

/// The skeleton application header (no substitution needed).
pub fn app_header() -> &'static str {
    APP_H
}

/// Render the skeleton `app.cpp`.
pub fn render_app_source(name: &str) -> String {
    APP_CPP.replace("@PROJ_NAME@", name)
}

/// Render the skeleton `main.cpp`.
pub fn render_main_source(name: &str) -> String {
    MAIN_CPP.replace("@PROJ_NAME@", name)
}
